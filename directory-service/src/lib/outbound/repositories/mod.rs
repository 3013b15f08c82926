pub mod account;
pub mod doctor;
pub mod specialty;

pub use account::PostgresAccountRepository;
pub use doctor::PostgresDoctorRepository;
pub use specialty::PostgresSpecialtyRepository;

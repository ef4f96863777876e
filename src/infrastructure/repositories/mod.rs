mod credentials;

pub use credentials::CredentialRepository;

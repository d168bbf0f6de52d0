pub mod book_repository;
pub mod member_validator;
pub mod notifier;

pub use book_repository::BookRepository;
pub use member_validator::MemberValidator;
pub use notifier::Notifier;

pub mod member_validator;
pub mod notifier;

pub use member_validator::MemberValidator;
pub use notifier::Notifier;

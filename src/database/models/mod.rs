pub mod company;
pub mod company_type;
pub mod shareholder;
pub mod shareholding;
pub mod user;

pub use company::Company;
pub use company_type::CompanyType;
pub use shareholder::Shareholder;
pub use shareholding::{CompanyHolding, ShareholderHolding, Shareholding};
pub use user::User;

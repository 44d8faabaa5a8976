//! One repository per aggregate. Each holds a pool clone and owns its SQL.

mod companies;
mod shareholders;
mod shareholdings;
mod users;

pub use companies::CompanyRepository;
pub use shareholders::ShareholderRepository;
pub use shareholdings::ShareholdingRepository;
pub use users::{NewUser, UserRepository};

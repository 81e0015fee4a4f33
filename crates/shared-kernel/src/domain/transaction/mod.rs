mod context;
mod session;
mod transaction;
mod transaction_manager;
mod transaction_source;

pub use context::{ActiveTransaction, Context};
pub(crate) use context::TransactionState;
pub use session::{Session, end};
pub use transaction::Transaction;
pub use transaction_manager::{OwningManager, TransactionManager};
pub use transaction_source::TransactionSource;


#[cfg(any(test, feature = "test-utils"))]
mod transaction_stub;
#[cfg(any(test, feature = "test-utils"))]
mod transaction_source_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use transaction_stub::{FakeTransaction, TransactionLog};
#[cfg(any(test, feature = "test-utils"))]
pub use transaction_source_stub::StubTransactionSource;

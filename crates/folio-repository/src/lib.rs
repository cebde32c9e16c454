//! # Folio Repository
//!
//! Data access for articles:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ArticleDataSource>
//! MySqlArticleDataSource        (filter + window → COUNT, SELECT)
//!   ↓  Filter::push_where
//! MySQL
//! ```

pub mod mysql;
pub mod pool;
pub mod query;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use query::*;
pub use traits::*;

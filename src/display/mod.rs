//! Display projections of resolved pricing.

mod money;
mod table;

pub use money::format_money;
pub use table::TableView;

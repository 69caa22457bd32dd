pub mod traits;
pub mod eager_prim;
pub mod lazy_prim;
pub mod kruskal;

pub use traits::{MinimumSpanningTree, MstResult};
pub use eager_prim::EagerPrim;
pub use lazy_prim::LazyPrim;
pub use kruskal::Kruskal;

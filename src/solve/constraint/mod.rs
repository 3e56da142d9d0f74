pub use self::arc_consistency::{ac3, ac3_with_arcs, revise, Arc};
pub use self::unary_constraints::enforce_node_consistency;

mod arc_consistency;
mod unary_constraints;

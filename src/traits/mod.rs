/// The pull capability shared by every source and stage.
pub mod producer;
/// Value capabilities: windowed arithmetic and activation predicates.
pub mod sample;
/// Identity and naming for pipeline stages.
pub mod stage;

// Text preparation shared by every downstream stage.

pub mod normalize;

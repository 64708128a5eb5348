//! Unidirectional data flow: an intent goes through a reducer and yields the
//! next model, which the view renders.

/// An event a reducer can consume: a keystroke, a trigger, a decoded response.
pub trait Intent: Send + 'static {}

/// A complete, replaceable snapshot. Equality is what observers use to tell
/// whether anything changed.
pub trait Model: Clone + PartialEq + Default + Send + 'static {}

/// Pure `(Model, Intent) -> Model`. No I/O, no clocks.
pub trait Reducer {
    type Model: Model;
    type Intent: Intent;

    fn reduce(state: Self::Model, intent: Self::Intent) -> Self::Model;
}

// Components module - interactive widgets
//
// - Selector: bounded single-choice picker over ordered labels
// - TextField: single-line editable text with a cursor
//
// Each widget owns its state and implements `Component`.

mod callback;
pub mod selector;
pub mod text_field;

pub use callback::Callback;
pub use selector::Selector;
pub use text_field::TextField;

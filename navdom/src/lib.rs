pub mod class_list;
pub mod document;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod selector;
pub mod terminal;

pub use class_list::ClassList;
pub use document::{Document, Node, NodeId};
pub use element::Element;
pub use event::{Event, EventKind, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any};
pub use layout::{layout, text_rows, LayoutResult, Rect, Row};
pub use listener::{Listener, Listeners};
pub use selector::{Selector, SelectorError};
pub use terminal::Terminal;

//! Type aliases for shared state.
//!
//! The panel, scene and camera live on one thread and are mutated in place
//! by change handlers, so sharing is `Rc<RefCell<T>>` rather than locks.
//!
//! ```rust,ignore
//! use odrviewer_core::types::*;
//!
//! let scene: Shared<RoadScene> = shared(RoadScene::default());
//! scene.borrow_mut().set_visible(SceneObjectId::ReferenceLine, true);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// Wrap a value in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::runtime::Value;

/// One environment frame: a local binding table plus an optional parent
///
/// Frames form a chain from the innermost call scope out to the globals.
/// A child holds its parent by `Rc`, so a frame stays alive as long as any
/// child frame or closure still references it. The binding table sits in a
/// `RefCell` because `define` mutates the frame it runs in while closures
/// hold shared references to it.
#[derive(Debug)]
pub struct Environment {
    parent: Option<Rc<Environment>>,
    bindings: RefCell<HashMap<String, Value>>,
}

impl Environment {
    /// Creates a root frame with no parent and no bindings
    pub fn root() -> Rc<Self> {
        Rc::new(Environment {
            parent: None,
            bindings: RefCell::new(HashMap::new()),
        })
    }

    /// Creates an empty child frame of `parent`
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Self::child_with(parent, [])
    }

    /// Creates a child frame of `parent` pre-populated with `bindings`
    ///
    /// Used for function calls: parameters are bound in the fresh frame.
    pub fn child_with(
        parent: &Rc<Self>,
        bindings: impl IntoIterator<Item = (String, Value)>,
    ) -> Rc<Self> {
        Rc::new(Environment {
            parent: Some(parent.clone()),
            bindings: RefCell::new(bindings.into_iter().collect()),
        })
    }

    /// Binds `name` to `value` in this frame
    ///
    /// Always writes locally, even when the name shadows an outer binding.
    /// That is the Egg `define` rule: outer frames are never mutated from
    /// an inner scope.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Looks `name` up along the frame chain, innermost first
    ///
    /// Returns `None` when the chain is exhausted; the evaluator turns that
    /// into the reference error so the message can carry the name.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        let mut frame = self.parent.clone();
        while let Some(env) = frame {
            if let Some(value) = env.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            frame = env.parent.clone();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_define_and_get() {
        let env = Environment::root();
        env.define("x", Value::Number(42.0));
        assert_eq!(env.get("x"), Some(Value::Number(42.0)));
    }

    #[test]
    fn test_undefined_variable() {
        let env = Environment::root();
        assert_eq!(env.get("nope"), None);
    }

    #[test]
    fn test_lookup_walks_parent_chain() {
        let root = Environment::root();
        root.define("x", Value::Number(1.0));
        let mid = Environment::child(&root);
        let leaf = Environment::child(&mid);
        assert_eq!(leaf.get("x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn test_define_shadows_without_mutating_parent() {
        let root = Environment::root();
        root.define("x", Value::Number(10.0));

        let inner = Environment::child(&root);
        inner.define("x", Value::Str("shadowed".to_string()));

        assert_eq!(inner.get("x"), Some(Value::Str("shadowed".to_string())));
        assert_eq!(root.get("x"), Some(Value::Number(10.0)));
    }

    #[test]
    fn test_child_with_bindings() {
        let root = Environment::root();
        let frame = Environment::child_with(
            &root,
            [
                ("a".to_string(), Value::Number(1.0)),
                ("b".to_string(), Value::Number(2.0)),
            ],
        );
        assert_eq!(frame.get("a"), Some(Value::Number(1.0)));
        assert_eq!(frame.get("b"), Some(Value::Number(2.0)));
        assert_eq!(root.get("a"), None);
    }

    #[test]
    fn test_later_defines_visible_through_shared_frame() {
        // A closure holding this frame must observe mutations made after
        // the capture
        let root = Environment::root();
        let captured = root.clone();
        root.define("late", Value::Number(7.0));
        assert_eq!(captured.get("late"), Some(Value::Number(7.0)));
    }

    #[test]
    fn test_redefine_overwrites_local_binding() {
        let env = Environment::root();
        env.define("x", Value::Number(1.0));
        env.define("x", Value::Number(2.0));
        assert_eq!(env.get("x"), Some(Value::Number(2.0)));
    }
}

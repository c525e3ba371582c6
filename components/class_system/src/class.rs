//! Classes and the class factory.
//!
//! A class owns three things: a member table (the prototype its instances
//! link to, which itself links to the parent's table), a set of class
//! variables, and a link to its parent class. Member lookup falls through
//! the table chain; class variables are copied down at `extend` time.

use std::any::Any;
use std::fmt;
use std::rc::{Rc, Weak};

use builtins::{ConstructorObject, JsValue, ObjectData, ObjectPrototype, ObjectRef, SELF_CLASS_KEY};
use core_types::{JsError, JsResult};
use tracing::debug;

use crate::config::ReservedKeys;
use crate::definition::Definition;
use crate::instance::{self, Instance};
use crate::mixins::merge_mixins;
use crate::statics::merge_statics;
use crate::wrapper::{wrap_method, SuperTarget};

thread_local! {
    static ROOT: Class = Class::new_root(Rc::new(ReservedKeys::default()));
}

pub(crate) struct ClassInner {
    this: Weak<ClassInner>,
    parent: Option<Class>,
    members: ObjectRef,
    statics: JsValue,
    keys: Rc<ReservedKeys>,
    depth: usize,
}

impl fmt::Debug for ClassInner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members.borrow().properties.keys().map(String::from).collect();
        f.debug_struct("Class")
            .field("depth", &self.depth)
            .field("members", &members)
            .field("statics", &self.statics.own_keys())
            .finish()
    }
}

impl ConstructorObject for ClassInner {
    fn prototype(&self) -> ObjectRef {
        self.members.clone()
    }

    fn get_static(&self, key: &str) -> Option<JsValue> {
        if key == SELF_CLASS_KEY {
            return self.upgrade().map(|class| class.to_value());
        }
        self.statics.get_own(key)
    }

    fn construct(&self, args: Vec<JsValue>) -> JsResult<JsValue> {
        let class = self
            .upgrade()
            .ok_or_else(|| JsError::internal_error("class was dropped during construction"))?;
        class.new_instance(args).map(Instance::into_value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ClassInner {
    fn upgrade(&self) -> Option<Class> {
        self.this.upgrade().map(|inner| Class { inner })
    }
}

/// A class produced by the class factory.
///
/// Cloning is cheap and yields the same class.
///
/// # Examples
///
/// ```
/// use builtins::JsValue;
/// use class_system::Class;
///
/// let point = Class::root()
///     .extend(Some(&JsValue::object_from([
///         ("__init__", JsValue::function(|ctx, args| {
///             let mut args = args.into_iter();
///             ctx.set("x", args.next().unwrap_or_default());
///             ctx.set("y", args.next().unwrap_or_default());
///             Ok(JsValue::Undefined)
///         })),
///         ("__classvars__", JsValue::object_from([("dimensions", JsValue::number(2.0))])),
///     ])))
///     .unwrap();
///
/// let p = point.new_instance(vec![JsValue::number(1.0), JsValue::number(2.0)]).unwrap();
/// assert_eq!(p.get("x"), Some(JsValue::number(1.0)));
/// assert_eq!(point.get_static("dimensions"), Some(JsValue::number(2.0)));
/// assert!(p.get("dimensions").is_none());
/// assert_eq!(p.class(), point);
/// ```
#[derive(Clone)]
pub struct Class {
    inner: Rc<ClassInner>,
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Class {}

impl Class {
    fn new_root(keys: Rc<ReservedKeys>) -> Class {
        let inner = Rc::new_cyclic(|this| ClassInner {
            this: this.clone(),
            parent: None,
            members: ObjectData::new_ref(None),
            statics: JsValue::object(),
            keys,
            depth: 0,
        });
        Class { inner }
    }

    /// The shared root class of this thread, using the default reserved keys.
    pub fn root() -> Class {
        ROOT.with(Class::clone)
    }

    /// A fresh, independent root whose whole lineage uses `keys`.
    pub fn root_with(keys: ReservedKeys) -> JsResult<Class> {
        keys.validate()?;
        Ok(Class::new_root(Rc::new(keys)))
    }

    /// Create a subclass from an optional definition bag.
    ///
    /// The new member table is built in three tiers: it falls through to
    /// the parent's table, then mixin members are copied in, then the
    /// definition's own members on top. Function members are wrapped so
    /// they see `$name` and `$super`; only the definition's own functions
    /// get a super target, since mixins sit outside the lineage. Class
    /// variables are the parent's, overridden by the definition's.
    ///
    /// A mixin method's `$super` never reaches the parent, even when the
    /// parent has a method of the same name; it is always a no-op.
    pub fn extend(&self, definition: Option<&JsValue>) -> JsResult<Class> {
        let keys = self.inner.keys.clone();
        let definition = Definition::parse(definition, &keys)?;
        let depth = self.inner.depth + 1;

        let members = ObjectData::new_ref(Some(self.inner.members.clone()));
        let table = JsValue::Object(members.clone());
        let mixed = merge_mixins(&definition.mixins, &table)?;
        ObjectPrototype::assign(&table, &definition.members)?;

        {
            let mut data = members.borrow_mut();
            let methods: Vec<(String, JsValue)> = data
                .properties
                .iter()
                .filter(|(_, v)| v.is_function())
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
            for (key, method) in methods {
                let target = if definition.members.has_own(&key) {
                    SuperTarget::Lineage(self.inner.members.clone())
                } else {
                    SuperTarget::Detached
                };
                let wrapped = wrap_method(&key, method, target, depth);
                data.properties.insert(key, wrapped);
            }
        }

        let statics = merge_statics(&self.inner.statics, definition.statics.as_ref())?;

        debug!(
            depth,
            members = members.borrow().properties.len(),
            mixin_members = mixed.len(),
            statics = statics.own_keys().len(),
            "created class"
        );

        let inner = Rc::new_cyclic(|this| ClassInner {
            this: this.clone(),
            parent: Some(self.clone()),
            members,
            statics,
            keys,
            depth,
        });
        Ok(Class { inner })
    }

    /// Construct an instance, running the nearest initializer once.
    pub fn new_instance(&self, args: Vec<JsValue>) -> JsResult<Instance> {
        instance::construct(self, args)
    }

    /// Recover a class from a host value.
    ///
    /// Fails with a `TypeError` for anything that is not a class produced
    /// by this crate.
    pub fn from_value(value: &JsValue) -> JsResult<Class> {
        value
            .as_constructor()
            .and_then(|ctor| ctor.as_any().downcast_ref::<ClassInner>())
            .and_then(ClassInner::upgrade)
            .ok_or_else(|| {
                JsError::type_error(format!("{} is not a class", value.to_js_string()))
            })
    }

    /// This class as a host value.
    pub fn to_value(&self) -> JsValue {
        JsValue::Constructor(self.as_constructor())
    }

    /// The parent class, `None` for a root.
    pub fn parent(&self) -> Option<Class> {
        self.inner.parent.clone()
    }

    /// Number of `extend` steps below the root.
    pub fn depth(&self) -> usize {
        self.inner.depth
    }

    /// This class and its ancestors, root last.
    pub fn lineage(&self) -> Vec<Class> {
        let mut lineage = vec![self.clone()];
        let mut current = self.parent();
        while let Some(class) = current {
            current = class.parent();
            lineage.push(class);
        }
        lineage
    }

    /// Whether `other` appears in this class's lineage (a class is its own
    /// subclass).
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.lineage().iter().any(|c| c == other)
    }

    /// The member table instances resolve against.
    pub fn prototype(&self) -> JsValue {
        JsValue::Object(self.inner.members.clone())
    }

    pub(crate) fn members(&self) -> &ObjectRef {
        &self.inner.members
    }

    pub(crate) fn as_constructor(&self) -> Rc<dyn ConstructorObject> {
        self.inner.clone()
    }

    /// Reserved keys shared by this lineage.
    pub fn reserved_keys(&self) -> &ReservedKeys {
        &self.inner.keys
    }

    /// Read a class variable (`$class` yields the class itself).
    pub fn get_static(&self, key: &str) -> Option<JsValue> {
        self.inner.get_static(key)
    }

    /// Set a class variable on this class only.
    ///
    /// Subclasses already created keep the copy they took at `extend` time.
    pub fn set_static(&self, key: &str, value: JsValue) {
        self.inner.statics.set(key, value);
    }

    /// Class variable names in enumeration order.
    pub fn static_names(&self) -> Vec<String> {
        self.inner.statics.own_keys()
    }
}

/// `extend` for callers holding an untyped class value.
pub fn extend_value(class: &JsValue, definition: Option<&JsValue>) -> JsResult<JsValue> {
    Class::from_value(class)?
        .extend(definition)
        .map(|class| class.to_value())
}

/// `new` for callers holding an untyped class value.
pub fn construct_value(class: &JsValue, args: Vec<JsValue>) -> JsResult<JsValue> {
    Class::from_value(class)?
        .new_instance(args)
        .map(Instance::into_value)
}

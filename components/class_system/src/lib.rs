//! Class semantics on a prototype object model.
//!
//! This crate layers single inheritance, constructor inheritance, super
//! dispatch, mixins and inherited class variables over the prototype-based
//! values of the `builtins` crate.
//!
//! # Overview
//!
//! - [`Class`] - a constructible type; [`Class::root`] is the base of every
//!   hierarchy and [`Class::extend`] is the class factory
//! - [`Instance`] - an object constructed from a class
//! - [`ReservedKeys`] - names of the definition-bag directives
//! - [`merge_mixins`] / [`merge_statics`] - the member and class-variable merges
//! - [`wrap_method`] - per-call `$name` / `$super` frames
//!
//! While a class method runs, its [`builtins::CallContext`] exposes the
//! method's name and a super-invoker for the overridden implementation.
//! Neither is ever stored on the instance.
//!
//! # Examples
//!
//! ```
//! use builtins::JsValue;
//! use class_system::Class;
//!
//! let animal = Class::root()
//!     .extend(Some(&JsValue::object_from([(
//!         "speak",
//!         JsValue::function(|_ctx, _args| Ok(JsValue::string("..."))),
//!     )])))
//!     .unwrap();
//!
//! let dog = animal
//!     .extend(Some(&JsValue::object_from([(
//!         "speak",
//!         JsValue::function(|ctx, args| {
//!             let base = ctx.call_super(args)?.to_js_string();
//!             Ok(JsValue::string(format!("{} says {}: woof", base, ctx.name().unwrap_or(""))))
//!         }),
//!     )])))
//!     .unwrap();
//!
//! let rex = dog.new_instance(vec![]).unwrap();
//! assert_eq!(
//!     rex.call_method("speak", vec![]).unwrap(),
//!     JsValue::string("... says speak: woof")
//! );
//! assert!(rex.is_instance_of(&animal));
//! assert!(rex.own_property_names().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod class;
mod config;
mod definition;
mod instance;
mod mixins;
mod statics;
mod wrapper;

pub use class::{construct_value, extend_value, Class};
pub use config::ReservedKeys;
pub use instance::Instance;
pub use mixins::merge_mixins;
pub use statics::merge_statics;
pub use wrapper::{wrap_method, SuperTarget};

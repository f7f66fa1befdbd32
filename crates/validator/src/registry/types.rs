//! Type-handler registry: exact type to validation routine.
//!
//! Dispatch is keyed by [`TypeId`], so only the exact registered type
//! matches. A handler for `Person` is never used for `&Person`, `Box<Person>`
//! or a newtype around it.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::context::Context;
use crate::foundation::ContractViolation;

/// Type name reported for type-erased values with no handler.
const UNKNOWN_TYPE: &str = "<unknown>";

// ============================================================================
// TYPE HANDLER
// ============================================================================

/// A type-erased validation routine bound to one exact type.
pub trait TypeHandler: Send + Sync {
    /// Runs the routine against `value`, driving checks on `ctx`.
    ///
    /// `value` must have the type the handler was registered for.
    fn handle(&self, value: &dyn Any, ctx: &mut Context<'_>);

    /// Name of the type this handler validates.
    fn type_name(&self) -> &'static str;
}

struct HandlerFn<T, F> {
    handler: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> TypeHandler for HandlerFn<T, F>
where
    T: Any,
    F: Fn(&T, &mut Context<'_>) + Send + Sync,
{
    fn handle(&self, value: &dyn Any, ctx: &mut Context<'_>) {
        match value.downcast_ref::<T>() {
            Some(value) => (self.handler)(value, ctx),
            None => unreachable!(
                "handler for `{}` dispatched to a value of another type",
                type_name::<T>()
            ),
        }
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Validation routines keyed by exact type.
#[derive(Default)]
pub struct TypeRegistry {
    handlers: HashMap<TypeId, Box<dyn TypeHandler>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to the exact type `T`, replacing any prior binding.
    pub fn register<T, F>(&mut self, handler: F) -> &mut Self
    where
        T: Any,
        F: Fn(&T, &mut Context<'_>) + Send + Sync + 'static,
    {
        let entry = HandlerFn {
            handler,
            _marker: PhantomData,
        };
        let type_name = type_name::<T>();
        if self
            .handlers
            .insert(TypeId::of::<T>(), Box::new(entry))
            .is_some()
        {
            debug!(type_name, "replaced existing type handler");
        } else {
            debug!(type_name, "registered type handler");
        }
        self
    }

    /// Looks up the handler for `T`.
    pub fn try_resolve<T: Any>(&self) -> Result<&dyn TypeHandler, ContractViolation> {
        self.lookup(TypeId::of::<T>(), type_name::<T>())
    }

    /// Looks up the handler for the runtime type of `value`.
    pub fn try_resolve_dyn(&self, value: &dyn Any) -> Result<&dyn TypeHandler, ContractViolation> {
        self.lookup(value.type_id(), UNKNOWN_TYPE)
    }

    /// Looks up the handler for `T`.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::UnregisteredType`] if `T` has no
    /// handler.
    pub fn resolve<T: Any>(&self) -> &dyn TypeHandler {
        match self.try_resolve::<T>() {
            Ok(handler) => handler,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Looks up the handler for the runtime type of `value`.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractViolation::UnregisteredType`] if that type has
    /// no handler.
    pub fn resolve_dyn(&self, value: &dyn Any) -> &dyn TypeHandler {
        match self.try_resolve_dyn(value) {
            Ok(handler) => handler,
            Err(violation) => panic!("{violation}"),
        }
    }

    /// Returns true if `T` has a handler.
    pub fn contains<T: Any>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Names of the registered types, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.values().map(|h| h.type_name()).collect();
        names.sort_unstable();
        names
    }

    fn lookup(
        &self,
        id: TypeId,
        type_name: &'static str,
    ) -> Result<&dyn TypeHandler, ContractViolation> {
        self.handlers
            .get(&id)
            .map(|handler| handler.as_ref())
            .ok_or(ContractViolation::UnregisteredType { type_name })
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}

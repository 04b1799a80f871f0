//! Items referenced by generated code. Not public API.

pub mod macro_utils {
    pub use alloc::string::ToString;

    pub use crate::impls::concat as __concat;
}

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::{GetTypeMeta, TypeRegistry};

    /// One registration function, submitted per `#[reflect(auto_register)]` type.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: GetTypeMeta> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Registered only when static registration works on this platform.
    #[derive(crate::derive::Reflect)]
    #[reflect(Opaque, auto_register)]
    pub struct __AvailFlag;

    pub fn __register_types(registry: &mut TypeRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}

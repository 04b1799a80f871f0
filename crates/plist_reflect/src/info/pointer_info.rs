use core::any::{Any, TypeId};

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Pointer;

/// Type info of a single level of indirection.
///
/// `Option<T>` is the nullable pointer, `Box<T>`, `Arc<T>` and
/// `&'static T` always point to a value.
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    target_id: TypeId,
    target_info: fn() -> &'static TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    impl_type_fn!(ty);

    #[inline]
    pub const fn new<TPtr: Pointer + TypePath, TTarget: Typed + ?Sized>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPtr>(),
            target_id: TypeId::of::<TTarget>(),
            target_info: TTarget::type_info,
            nullable,
        }
    }

    #[inline]
    pub const fn target_id(&self) -> TypeId {
        self.target_id
    }

    #[inline]
    pub fn target_is<T: Any + ?Sized>(&self) -> bool {
        self.target_id == TypeId::of::<T>()
    }

    /// Info of the pointee's static type.
    ///
    /// For `Box<dyn Reflect>` this is opaque, the runtime value carries
    /// its own info.
    #[inline]
    pub fn target_info(&self) -> &'static TypeInfo {
        (self.target_info)()
    }

    /// Returns `true` if the pointer can be null.
    #[inline]
    pub const fn nullable(&self) -> bool {
        self.nullable
    }
}

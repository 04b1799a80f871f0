use core::fmt;

use crate::ops::{List, Map, Pointer, Struct};

/// Implements [`Reflect::reflect_debug`](crate::Reflect::reflect_debug) for [`Struct`] kinds.
#[inline(never)]
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(dyn_struct.reflect_type_name());
    for index in 0..dyn_struct.field_len() {
        if let (Some(name), Some(field)) = (dyn_struct.name_at(index), dyn_struct.field_at(index)) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// Implements [`Reflect::reflect_debug`](crate::Reflect::reflect_debug) for [`List`] kinds.
#[inline(never)]
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Implements [`Reflect::reflect_debug`](crate::Reflect::reflect_debug) for [`Map`] kinds.
#[inline(never)]
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// Implements [`Reflect::reflect_debug`](crate::Reflect::reflect_debug) for [`Pointer`] kinds.
///
/// Nullable pointers print like `Option`, the others print their target.
#[inline(never)]
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let nullable = dyn_pointer
        .reflect_type_info()
        .as_pointer()
        .is_ok_and(|info| info.nullable());

    match dyn_pointer.target() {
        None => f.write_str("None"),
        Some(target) if nullable => f.debug_tuple("Some").field(&target).finish(),
        Some(target) => target.reflect_debug(f),
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::format;
    use alloc::string::String;

    use crate::Reflect;

    #[test]
    fn map_and_box_debug() {
        let map = BTreeMap::from([(String::from("k"), Box::new(true))]);
        assert_eq!(format!("{:?}", map.as_reflect()), r#"{Text("k"): Bool(true)}"#);
    }
}

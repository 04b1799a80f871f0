use alloc::string::{String, ToString};

use crate::derive::impl_reflect_opaque;
use crate::{MarshalText, MarshalTextError};

impl_reflect_opaque!(::core::net::IpAddr(marshal_text));
impl_reflect_opaque!(::core::net::Ipv4Addr(marshal_text));
impl_reflect_opaque!(::core::net::Ipv6Addr(marshal_text));
impl_reflect_opaque!(::core::net::SocketAddr(marshal_text));
impl_reflect_opaque!(::core::net::SocketAddrV4(marshal_text));
impl_reflect_opaque!(::core::net::SocketAddrV6(marshal_text));

macro_rules! impl_marshal_text_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MarshalText for $ty {
                #[inline]
                fn marshal_text(&self) -> Result<String, MarshalTextError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_marshal_text_display!(
    ::core::net::IpAddr,
    ::core::net::Ipv4Addr,
    ::core::net::Ipv6Addr,
    ::core::net::SocketAddr,
    ::core::net::SocketAddrV4,
    ::core::net::SocketAddrV6,
);

#[cfg(test)]
mod tests {
    use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath};

    #[test]
    fn addresses_render_as_text() {
        let addr = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert_eq!(addr.reflect_kind(), ReflectKind::Opaque);
        let text = addr.reflect_text().unwrap().marshal_text().unwrap();
        assert_eq!(text, "::1");

        let socket = SocketAddr::from((Ipv4Addr::new(10, 0, 0, 1), 8080));
        let text = socket.reflect_text().unwrap().marshal_text().unwrap();
        assert_eq!(text, "10.0.0.1:8080");

        assert_eq!(<Ipv4Addr as TypePath>::type_path(), "core::net::Ipv4Addr");
    }
}

mod marshal_text;

pub use marshal_text::TypeTraitMarshalText;

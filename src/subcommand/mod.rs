mod encode;

pub use self::encode::encode;

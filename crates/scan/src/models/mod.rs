mod record;
mod resource_type;

pub use self::record::DocumentRecord;
pub use self::resource_type::ResourceType;

// Settings Domain Layer
//
// 领域层定义设置文档的核心实体、值对象、默认值与派生规则

pub mod collections;
pub mod defaults;
pub mod entities;
pub mod events;
pub mod selectors;
pub mod value_objects;

pub use collections::*;
pub use entities::*;
pub use events::*;
pub use value_objects::*;

pub mod host;
pub mod layout;
pub mod store;
pub mod zone;
pub mod zone_set;

pub use host::{MonitorId, NoopWindowHost, WindowHost, WindowId};
pub use layout::{GridLayoutInfo, LayoutKind};
pub use store::{CustomLayout, LayoutStore, MemoryLayoutStore};
pub use zone::Zone;
pub use zone_set::{MoveDirection, ZoneSet, ZoneSetConfig};

//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! Futures returned by ports are not required to be `Send`: the widgets run
//! on the browser's single-threaded event loop.

pub mod clock;
pub mod fetcher;
pub mod page_data;
pub mod view;

pub use clock::{Clock, SystemClock};
pub use fetcher::{CSRF_HEADER, FetchError, ServicesFetcher, ServicesRequest};
pub use page_data::PageData;
pub use view::ServicesView;

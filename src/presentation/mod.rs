//! Turning raw events into display text and HTML.

pub mod formatters;
pub mod markup;
pub mod page;

pub use formatters::{
    format_date, format_description, format_location, format_recurrence, FormattedLocation,
};
pub use markup::TrustedMarkup;
pub use page::{render_index, EventCard, IndexPage};

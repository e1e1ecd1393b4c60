//! Fixed organization constants baked into the site.

/// Display name of the organization.
pub const ORGANIZATION_NAME: &str = "Grace Community Church";

/// Street address used when an event has no location of its own.
pub const ORGANIZATION_ADDRESS: &str = "1200 Mercy Lane, Springfield, IL 62704";

/// IANA timezone all event times are expressed in.
pub const TIMEZONE: &str = "America/Chicago";

/// Domain suffix for iCalendar UIDs.
pub const ICAL_UID_DOMAIN: &str = "gracecommunity.church";

/// iCalendar `PRODID` value.
pub const ICAL_PRODID: &str = "-//Grace Community Church//Events//EN";

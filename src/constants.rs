// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of how
//! an image request is assembled: where the capability descriptor lives,
//! which fixed path segments every request carries, and how large a result
//! the handler will ask for by default.

// ---------------------------------------------------------------------------
// Image API request syntax
// ---------------------------------------------------------------------------

/// Name of the capability descriptor document, appended to the base URI.
pub const INFO_DOCUMENT: &str = "info.json";

/// Region parameter for the whole image, and the selector sentinel callers
/// use to mean the same thing.
pub const FULL_REGION: &str = "full";

/// Prefix of the percentage-rectangle region selector.
pub const PCT_PREFIX: &str = "pct:";

/// Size keyword for "as large as permitted" under the v2 generation.
pub const SIZE_KEYWORD_V2: &str = "full";

/// Size keyword for "as large as permitted" under the v3 generation.
///
/// Same concept as [`SIZE_KEYWORD_V2`]; the two generations disagree on the
/// literal.
pub const SIZE_KEYWORD_V3: &str = "max";

/// Fixed rotation segment. This system never rotates.
pub const ROTATION_NONE: &str = "0";

/// Fixed quality/format suffix of every image request.
pub const QUALITY_FORMAT: &str = "default.jpg";

// ---------------------------------------------------------------------------
// Version detection markers
// ---------------------------------------------------------------------------

/// Substring of the `@context` URI that identifies a v3 descriptor.
pub const IMAGE_3_CONTEXT_MARKER: &str = "/image/3/";

/// Substring of the `@context` URI that identifies a v2 descriptor.
pub const IMAGE_2_CONTEXT_MARKER: &str = "/image/2/";

/// `type` value of a v3 image service, used when the context is absent.
pub const IMAGE_SERVICE_3_TYPE: &str = "ImageService3";

// ---------------------------------------------------------------------------
// Handler defaults
// ---------------------------------------------------------------------------

/// Default ceiling on either requested dimension, in pixels.
///
/// Keeps agent-bound payloads at a size a vision model can actually use.
/// Callers raise or lower it per handler instance; the server's own declared
/// limits still apply on top.
pub const DEFAULT_MAX_DIMENSION: u32 = 1000;

/// Content type assumed when the image server omits the header.
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

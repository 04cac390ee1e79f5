//! Pipeline stages for one probe.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ encode ──▶ request ──▶ transport ──▶ response
//! (bytes)   (base64)   (JSON doc)  (HTTP POST)   (content | diagnostic)
//! ```
//!
//! 1. [`input`]: read the image file into memory
//! 2. [`encode`]: base64-wrap the bytes as an [`encode::EncodedImage`]
//! 3. [`crate::request`]: assemble the fixed-shape chat document
//! 4. [`transport`]: POST it; the only stage with network I/O
//! 5. [`response`]: pull `choices[0].message.content` out of a 200, or
//!    describe any other status

pub mod encode;
pub mod input;
pub mod response;
pub mod transport;

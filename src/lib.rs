/*!
Rust library and tool to hold and inspect resource dump segments.

A segment is a unit of data with a byte size, a payload and a type. Every
segment implements [`Segment`], so that callers can handle heterogeneous
segments uniformly.

# Usage as a command-line tool

After building with `cargo install --bin rdsegment --features cli`, a new `rdsegment` executable becomes available.

It loads a file as a single raw segment with the following commands:

* `get size`: Print the segment's size in bytes
* `get type`: Print the segment's type
* `get data`: Print the segment's payload, raw or hex-encoded

# Usage as a library

```rust
use rdsegment::Segment;
use rdsegment::model::{FixedSegment, RawSegment, SegmentType};

// let content = std::fs::read("segment.bin").unwrap();
# let content = vec![0xde, 0xad, 0xbe, 0xef];
let segment = RawSegment::with_data(SegmentType::new(0x1000), content);
println!("Segment {} holds {} bytes", segment.kind(), segment.size());
# assert_eq!(segment.size(), 4);

let fixed = FixedSegment::new("FIXED", b"\x01\x02\x03");
assert_eq!(fixed.size(), 3);
assert_eq!(fixed.data().unwrap(), b"\x01\x02\x03");
assert_eq!(fixed.kind(), "FIXED");
```
*/

mod error;
pub use error::*;
pub mod model;
pub use model::Segment;

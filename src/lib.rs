//! # `mimosa26`
//!
//! A [sans-I/O](https://sans-io.readthedocs.io/how-to-sans-io.html)
//! decoder for the raw data stream of a beam-telescope readout built from
//! six Mimosa26 monolithic active pixel sensor planes and one Trigger
//! Logic Unit (TLU).
//!
//! The stream is a sequence of 32-bit words. A word with `0x20` in its top
//! byte belongs to one of the Mimosa26 planes:
//!
//! - bits 23..20: plane number, 1 to 6;
//! - bit 17: data-loss flag, set by the readout when words were dropped;
//! - bit 16: frame-start flag, set on the first word of a frame;
//! - bits 15..0: payload.
//!
//! The payload of one Mimosa26 frame follows a fixed grammar, driven by the
//! word's position within the frame:
//!
//! - frame header low and high (a timestamp generated by the readout)
//!   \[word index 0 + 1\];
//! - frame number low and high (the rolling Mimosa26 frame counter)
//!   \[word index 2 + 3\];
//! - frame length, repeated on two data lines \[word index 4 + 5\];
//! - hit data: a row word followed by the column words of that row, the
//!   pattern repeating until the frame length is exhausted;
//! - frame trailer low and high (`0xAA50`, `0xAA50 | plane`).
//!
//! A word with bit 31 set is a TLU trigger word carrying a 15-bit trigger
//! timestamp in bits 30..16 and a 16-bit trigger number in bits 15..0.
//! Anything else is unknown.
//!
//! [`Interpreter`] is the sans-I/O core: it consumes chunks of raw words
//! through [`Interpreter::interpret`] and emits one [`Hit`] per fired
//! pixel, plus one synthetic hit (`plane == 255`) per trigger word. All
//! decoding state persists between calls, so an arbitrarily long stream
//! may be fed in chunks of any size. Stream anomalies never abort
//! decoding; they set bits of the [`status`] bitmap which is carried
//! in-band on the emitted hits.
//!
//! [`Decoder`] wraps any [`Read`](std::io::Read) instance, assembles
//! little-endian words from the byte stream and yields hits through an
//! iterator:
//!
//! ```
//! use mimosa26::{Decoder, DecoderOptions};
//!
//! // or a std::fs::File, or anything else that implements std::io::Read
//! let stream: &[u8] = &[
//!     // ...
//! ];
//! let mut decoder = Decoder::new(stream, DecoderOptions::default()).unwrap();
//! for hit in decoder.hits() {
//!     // ...
//! }
//! ```

mod iter;
pub use iter::{Decoder, DecoderError, DecoderOptions, Hits};

use bitmatch::bitmatch;

/// Number of Mimosa26 planes in the telescope.
pub const PLANES: usize = 6;

/// Plane number carried by TLU-synthesized hit records.
pub const TLU_PLANE: u8 = 255;

/// One Mimosa26 frame in units of the 40 MHz clock (115.2 µs rolling
/// shutter cycle).
pub const FRAME_UNIT_CYCLE: u32 = 4608;

/// Number of columns of one Mimosa26 plane.
pub const COLUMNS: u16 = 1152;

/// Number of rows of one Mimosa26 plane.
pub const ROWS: u16 = 576;

const FRAME_TRAILER0: u16 = 0xAA50;

pub mod status {
    //! Event-status bitmap carried on every emitted [`Hit`](super::Hit).
    //!
    //! The interpreter accumulates status bits per plane (and one slot for
    //! the TLU) and snapshots them into
    //! [`Hit::event_status`](super::Hit::event_status) at emission time.
    //! Several bits are defined for the downstream event builder and are
    //! never set here.

    /// Event has more than one trigger word. Reserved for the event builder.
    pub const MULTIPLE_TRG_WORD: u32 = 0x0000_0001;
    /// Some hits of the event have no trigger word. Reserved for the event builder.
    pub const NO_TRG_WORD: u32 = 0x0000_0002;
    /// Word combination that does not make sense. Reserved for the event builder.
    pub const DATA_ERROR: u32 = 0x0000_0004;
    /// The two frame-length words disagree.
    pub const EVENT_INCOMPLETE: u32 = 0x0000_0008;
    /// A word was neither a Mimosa26 nor a TLU word.
    pub const UNKNOWN_WORD: u32 = 0x0000_0010;
    /// A frame carried an uneven amount of hit-data words.
    pub const UNEVEN_EVENT: u32 = 0x0000_0020;
    /// The trigger number did not increase by one.
    pub const TRG_ERROR: u32 = 0x0000_0040;
    /// Event was truncated. Reserved for the event builder.
    pub const TRUNC_EVENT: u32 = 0x0000_0080;
    /// Frame trailer high mismatch.
    pub const TRAILER_H_ERROR: u32 = 0x0000_0100;
    /// Frame trailer low mismatch.
    pub const TRAILER_L_ERROR: u32 = 0x0000_0200;
    /// The Mimosa26 readout flagged a row overflow.
    pub const MIMOSA_OVERFLOW: u32 = 0x0000_0400;
    /// Event without any hit. Reserved for the event builder.
    pub const NO_HIT: u32 = 0x0000_0800;
    /// Column number out of range.
    pub const COL_ERROR: u32 = 0x0000_1000;
    /// Row number out of range.
    pub const ROW_ERROR: u32 = 0x0000_2000;
    /// The record was produced by a TLU trigger word.
    pub const TRG_WORD: u32 = 0x0000_4000;
    /// The 32-bit Mimosa26 header timestamp wrapped around.
    pub const TS_OVERFLOW: u32 = 0x0000_8000;
}

/// A single decoded record: one fired pixel of a Mimosa26 plane, or one
/// TLU trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    /// Plane number, 1 to 6 for Mimosa26 hits; [`TLU_PLANE`] for records
    /// synthesized from a trigger word.
    pub plane: u8,

    /// Mimosa26 frame counter of the plane this hit belongs to. For TLU
    /// records, the frame the trigger falls into, computed from the
    /// trigger timestamp.
    pub frame: u32,

    /// Reconstructed 32-bit timestamp in 40 MHz clock cycles: the frame
    /// header timestamp for Mimosa26 hits, the reconstructed 31-bit
    /// trigger timestamp for TLU records.
    pub time_stamp: u32,

    /// Most recent trigger number at emission time; 0 until the first
    /// trigger word was seen.
    pub trigger_number: u16,

    /// Column of the fired pixel, 0..1151. Always 0 for TLU records.
    pub column: u16,

    /// Row of the fired pixel, 0..575. For TLU records, the distance of
    /// the trigger from the last frame header of plane 1 in clock cycles
    /// (modulo [`FRAME_UNIT_CYCLE`]).
    pub row: u16,

    /// Snapshot of the plane's [`status`] bitmap at emission time.
    pub event_status: u32,
}

/// A classified raw data word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawWord {
    /// Mimosa26 data word (`0x20` in the top byte).
    M26(M26Word),

    /// TLU trigger word (bit 31 set).
    Trigger {
        /// 15-bit trigger timestamp in 40 MHz clock cycles.
        time_stamp: u16,

        /// 16-bit trigger number.
        number: u16,
    },

    /// Neither a Mimosa26 nor a TLU word.
    Unknown(u32),
}

/// The fields of a Mimosa26 data word. What the payload means is decided
/// by the word's position in the plane's frame, not by its bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct M26Word {
    /// Plane number, 1 to 6 on a well-formed stream.
    pub plane: u8,

    /// The readout dropped words; the rest of the frame is unusable.
    pub data_loss: bool,

    /// First word of a new frame.
    pub frame_start: bool,

    /// The 16-bit data payload.
    pub payload: u16,
}

/// Classifies one raw 32-bit word.
#[bitmatch]
pub fn classify(word: u32) -> RawWord {
    #[bitmatch]
    match word {
        "0010_0000_pppp_??lf_dddd_dddd_dddd_dddd" => RawWord::M26(M26Word {
            plane: p as u8,
            data_loss: l != 0,
            frame_start: f != 0,
            payload: d as u16,
        }),
        "1ttt_tttt_tttt_tttt_nnnn_nnnn_nnnn_nnnn" => RawWord::Trigger {
            time_stamp: t as u16,
            number: n as u16,
        },
        "wwww_wwww_wwww_wwww_wwww_wwww_wwww_wwww" => RawWord::Unknown(w),
    }
}

/// Fatal configuration errors, surfaced at construction before any data
/// is consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Only trigger data format 2 (15-bit trigger timestamp + 16-bit
    /// trigger number) carries enough information to align triggers with
    /// Mimosa26 frames.
    #[error("unsupported trigger data format {0}; only format 2 (15-bit timestamp + 16-bit trigger number) is supported")]
    UnsupportedTriggerFormat(u8),
}

/// [`Interpreter`] configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Expected maximum number of hits emitted by one
    /// [`Interpreter::interpret`] call. Sizes the initial hit-buffer
    /// allocation; the buffer grows on demand, so this affects allocation
    /// only, never the output.
    pub max_hits_per_chunk: usize,

    /// Encoding of the TLU trigger words:
    ///
    /// - 0: trigger number only (not supported);
    /// - 1: timestamp only (not supported);
    /// - 2: 15-bit timestamp + 16-bit trigger number.
    pub trigger_data_format: u8,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        InterpreterOptions {
            max_hits_per_chunk: 500_000,
            trigger_data_format: 2,
        }
    }
}

/// Decoding context of one Mimosa26 plane.
///
/// `frame_length` and `row` keep a -1 sentinel while unset; only
/// non-negative values ever reach an emitted [`Hit`].
#[derive(Debug, Clone, Copy)]
struct PlaneState {
    /// Position of the last consumed word within the current frame.
    word_index: i32,

    /// Frame counter latched from the frame-number words.
    frame_id: u32,

    /// Number of hit-data words announced by the frame-length words.
    frame_length: i32,

    /// Header timestamp, assembled from the two header words.
    time_stamp: u32,

    /// Column words remaining in the current row group.
    n_words: u32,

    /// Row latched from the most recent row word.
    row: i32,

    /// Discard everything until the next frame-start word.
    data_loss: bool,

    /// Accumulated [`status`] bits.
    event_status: u32,
}

impl PlaneState {
    fn new() -> Self {
        PlaneState {
            word_index: 0,
            frame_id: 0,
            frame_length: -1,
            time_stamp: 0,
            n_words: 0,
            row: -1,
            data_loss: false,
            event_status: 0,
        }
    }
}

/// TLU decoding context.
///
/// The trigger-number cursors keep a -1 sentinel until real triggers were
/// seen; emitted hits clamp the sentinel to 0.
#[derive(Debug, Clone, Copy)]
struct TriggerState {
    /// Most recently decoded trigger number.
    number: i32,

    /// The trigger number before that, used for the continuity check.
    last_number: i32,

    /// Reconstructed timestamp of the current trigger. Kept wide; the
    /// emitted field is the truncated 32-bit value.
    time_stamp: u64,

    /// Reconstructed timestamp of the previous trigger.
    last_time_stamp: u64,

    /// Frame the current trigger falls into.
    frame: u32,

    /// Accumulated [`status`] bits of the TLU slot.
    event_status: u32,
}

impl TriggerState {
    fn new() -> Self {
        TriggerState {
            number: -1,
            last_number: -1,
            time_stamp: 0,
            last_time_stamp: 0,
            frame: 0,
            event_status: 0,
        }
    }
}

/// Streaming interpreter for the Mimosa26 + TLU raw word stream.
///
/// One interpreter owns the decoding state of all six planes and the TLU.
/// Feeding a stream chunk by chunk through [`interpret`](Self::interpret)
/// produces exactly the same hits as feeding it whole; anomalies detected
/// in one chunk are carried on the affected hits of later chunks.
pub struct Interpreter {
    /// Per-plane frame decoding contexts; index 0 is plane 1.
    planes: [PlaneState; PLANES],

    /// TLU context.
    trigger: TriggerState,

    /// Plane 1 frame counter, snapshotted when its frame header arrives.
    /// Anchors the frame-of-trigger computation.
    last_frame_id: u32,

    /// Plane 1 header timestamp, snapshotted alongside `last_frame_id`.
    /// Supplies the upper bits of the reconstructed trigger timestamp.
    last_m26_time_stamp: u32,

    max_hits_per_chunk: usize,
}

impl Interpreter {
    /// Creates an interpreter in its initial state.
    ///
    /// Fails if the configured trigger data format is not format 2; the
    /// other formats do not carry the trigger timestamp needed to align
    /// triggers with Mimosa26 frames.
    pub fn new(options: InterpreterOptions) -> Result<Interpreter, ConfigError> {
        if options.trigger_data_format != 2 {
            return Err(ConfigError::UnsupportedTriggerFormat(
                options.trigger_data_format,
            ));
        }

        Ok(Interpreter {
            planes: [PlaneState::new(); PLANES],
            trigger: TriggerState::new(),
            last_frame_id: 0,
            last_m26_time_stamp: 0,
            max_hits_per_chunk: options.max_hits_per_chunk,
        })
    }

    /// Returns the interpreter to its construction state, ready for a new
    /// stream.
    pub fn reset(&mut self) {
        self.planes = [PlaneState::new(); PLANES];
        self.trigger = TriggerState::new();
        self.last_frame_id = 0;
        self.last_m26_time_stamp = 0;
    }

    /// Most recently decoded trigger number, or `None` before the first
    /// trigger word.
    pub fn trigger_number(&self) -> Option<u16> {
        if self.trigger.number < 0 {
            None
        } else {
            Some(self.trigger.number as u16)
        }
    }

    /// Reconstructed timestamp of the most recent trigger.
    pub fn trigger_time_stamp(&self) -> u32 {
        self.trigger.time_stamp as u32
    }

    /// Reconstructed timestamp of the trigger before the most recent one.
    pub fn last_trigger_time_stamp(&self) -> u32 {
        self.trigger.last_time_stamp as u32
    }

    /// Interprets one chunk of the raw word stream and returns the hits
    /// it produced, in stream order.
    ///
    /// ```
    /// use mimosa26::{Interpreter, InterpreterOptions};
    ///
    /// let raw: &[u32] = &[
    ///     0x2011_5555, // plane 1 frame header (timestamp low)
    ///     0x2010_5551, // frame header (timestamp high)
    ///     0x2010_0001, // frame number low
    ///     0x2010_0000, // frame number high
    ///     0x2010_0001, // frame length
    ///     0x2010_0001, // frame length, repeated
    ///     0x2010_0321, // row word: row 50, one column word follows
    ///     0x2010_0190, // column word: column 100, single hit
    ///     0x2010_aa50, // frame trailer low
    ///     0x2010_aa51, // frame trailer high
    /// ];
    ///
    /// let mut interpreter = Interpreter::new(InterpreterOptions::default()).unwrap();
    /// let hits = interpreter.interpret(raw);
    ///
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!((hits[0].plane, hits[0].column, hits[0].row), (1, 100, 50));
    /// ```
    pub fn interpret(&mut self, raw_data: &[u32]) -> Vec<Hit> {
        let mut hits = Vec::with_capacity(self.max_hits_per_chunk);
        for &word in raw_data {
            self.interpret_word(word, &mut hits);
        }
        hits
    }

    /// Decodes a single word, appending any hits it completes.
    pub(crate) fn interpret_word(&mut self, word: u32, hits: &mut Vec<Hit>) {
        match classify(word) {
            RawWord::M26(w) => self.m26_word(w, hits),
            RawWord::Trigger { time_stamp, number } => {
                self.trigger_word(time_stamp, number, hits)
            }
            RawWord::Unknown(w) => {
                log::debug!("unknown raw data word {:#010x}", w);
                self.trigger.event_status |= status::UNKNOWN_WORD;
            }
        }
    }

    fn m26_word(&mut self, w: M26Word, hits: &mut Vec<Hit>) {
        let plane = match w.plane {
            p @ 1..=6 => usize::from(p) - 1,
            p => {
                log::debug!("Mimosa26 word with plane number {} outside 1..=6", p);
                self.trigger.event_status |= status::UNKNOWN_WORD;
                return;
            }
        };

        if w.data_loss {
            self.planes[plane].data_loss = true;
            return;
        }

        if w.frame_start {
            // Frames of all planes are aligned at this header. The anchor
            // for the trigger-to-frame association is snapshotted from
            // plane 1 before the new header timestamp is latched, so it
            // refers to the previous frame.
            if plane == 0 {
                self.last_m26_time_stamp = self.planes[0].time_stamp;
                self.last_frame_id = self.planes[0].frame_id;
            }
            let p = &mut self.planes[plane];
            p.time_stamp = (p.time_stamp & 0xffff_0000) | u32::from(w.payload);
            p.word_index = 0;
            p.frame_length = -1;
            p.n_words = 0;
            p.data_loss = false;
            return;
        }

        if self.planes[plane].data_loss {
            return;
        }

        self.planes[plane].word_index += 1;
        let index = self.planes[plane].word_index;
        let frame_length = self.planes[plane].frame_length;
        let payload = w.payload;

        match index {
            1 => {
                // Header high word. A smaller upper half than before means
                // the 32-bit timestamp counter wrapped.
                let p = &mut self.planes[plane];
                let high = u32::from(payload) << 16;
                if high < (p.time_stamp & 0xffff_0000) {
                    p.event_status |= status::TS_OVERFLOW;
                }
                p.time_stamp = high | (p.time_stamp & 0x0000_ffff);
            }
            2 => {
                let p = &mut self.planes[plane];
                p.frame_id = (p.frame_id & 0xffff_0000) | u32::from(payload);
            }
            3 => {
                let p = &mut self.planes[plane];
                p.frame_id = (u32::from(payload) << 16) | (p.frame_id & 0x0000_ffff);
            }
            4 => {
                self.planes[plane].frame_length = i32::from(payload) * 2;
            }
            5 => {
                // The frame length is repeated on the second data line.
                if frame_length != i32::from(payload) * 2 {
                    self.planes[plane].event_status |= status::EVENT_INCOMPLETE;
                }
            }
            i if i == 5 + frame_length + 1 => {
                if payload != FRAME_TRAILER0 {
                    self.planes[plane].event_status |= status::TRAILER_H_ERROR;
                }
            }
            i if i == 5 + frame_length + 2 => {
                if payload != FRAME_TRAILER0 | (plane as u16 + 1) {
                    self.planes[plane].event_status |= status::TRAILER_L_ERROR;
                }
            }
            i if i > 5 + frame_length + 2 => {
                log::debug!(
                    "plane {}: data word past the frame trailer, resynchronizing at the next header",
                    plane + 1
                );
                self.planes[plane].data_loss = true;
            }
            _ => self.pixel_word(plane, payload, hits),
        }
    }

    #[bitmatch]
    fn pixel_word(&mut self, plane: usize, payload: u16, hits: &mut Vec<Hit>) {
        let p = &mut self.planes[plane];
        if p.n_words == 0 {
            // Row word: the row address and the number of column words
            // that follow for this row.
            #[bitmatch]
            let "orrr_rrrr_rrrr_nnnn" = payload;
            if p.word_index == 5 + p.frame_length {
                // A row word in the last data slot has no column words
                // left; the filler is skipped without latching.
                p.event_status |= status::UNEVEN_EVENT;
            } else {
                p.n_words = u32::from(n);
                p.row = i32::from(r);
            }
            if o != 0 {
                p.event_status |= status::MIMOSA_OVERFLOW;
                p.n_words = 0;
            }
            if p.row > 576 {
                p.event_status |= status::ROW_ERROR;
            }
        } else {
            p.n_words -= 1;
            #[bitmatch]
            let "???c_cccc_cccc_cchh" = payload;
            if c >= 1152 {
                p.event_status |= status::COL_ERROR;
            }

            let hit = Hit {
                plane: plane as u8 + 1,
                frame: p.frame_id,
                time_stamp: p.time_stamp,
                trigger_number: if self.trigger.number < 0 {
                    0
                } else {
                    self.trigger.number as u16
                },
                column: c,
                row: p.row as u16,
                event_status: p.event_status,
            };
            // A column word with h set encodes h + 1 adjacent fired pixels.
            for k in 0..=h {
                hits.push(Hit {
                    column: c + k,
                    ..hit
                });
            }

            // The emitted hits close the status window of all planes.
            for p in self.planes.iter_mut() {
                p.event_status = 0;
            }
        }
    }

    fn trigger_word(&mut self, ts15: u16, number: u16, hits: &mut Vec<Hit>) {
        // A trigger word opens a fresh TLU status window.
        self.trigger.event_status = status::TRG_WORD;

        let incoming = i32::from(number);
        // The trigger counter must advance by one; the zero crossing of
        // the 16-bit counter is exempt. The reference cursor trails the
        // current trigger by one word.
        if self.trigger.last_number >= 0
            && self.trigger.number >= 0
            && self.trigger.last_number + 1 != incoming
            && incoming > 0
        {
            log::debug!(
                "trigger number discontinuity: {} after {}",
                incoming,
                self.trigger.number
            );
            self.trigger.event_status |= status::TRG_ERROR;
        }
        self.trigger.last_number = self.trigger.number;
        self.trigger.number = incoming;

        // Reconstruct the 31-bit trigger timestamp by borrowing the upper
        // bits of the last plane 1 header timestamp. Frame headers recur
        // every 4608 cycles, well inside the 2^15-cycle period of the
        // trigger timestamp counter, so the anchor is unambiguous.
        let anchor = u64::from(self.last_m26_time_stamp);
        let mut time_stamp = u64::from(ts15) | (anchor & 0xffff_8000);
        // The 15-bit counter wrapped since the anchoring header.
        if time_stamp < anchor {
            time_stamp += 1 << 15;
        }
        // Distance between the anchoring frame header and the trigger,
        // accounting for a wrap of the 32-bit timestamp itself.
        let delta = if time_stamp < anchor {
            time_stamp + ((1u64 << 32) - anchor)
        } else {
            time_stamp - anchor
        };
        self.trigger.last_time_stamp = self.trigger.time_stamp;
        self.trigger.time_stamp = time_stamp;
        self.trigger.frame = self
            .last_frame_id
            .wrapping_add((delta / u64::from(FRAME_UNIT_CYCLE)) as u32);

        hits.push(Hit {
            plane: TLU_PLANE,
            frame: self.trigger.frame,
            time_stamp: self.trigger.time_stamp as u32,
            trigger_number: number,
            column: 0,
            row: (delta % u64::from(FRAME_UNIT_CYCLE)) as u16,
            event_status: self.trigger.event_status,
        });
    }
}

#[cfg(test)]
mod word_classification {
    use super::*;

    #[test]
    fn m26_data_words() {
        assert_eq!(
            classify(0x2011_5555),
            RawWord::M26(M26Word {
                plane: 1,
                data_loss: false,
                frame_start: true,
                payload: 0x5555,
            })
        );

        assert_eq!(
            classify(0x2060_aa56),
            RawWord::M26(M26Word {
                plane: 6,
                data_loss: false,
                frame_start: false,
                payload: 0xaa56,
            })
        );

        assert_eq!(
            classify(0x2012_0000),
            RawWord::M26(M26Word {
                plane: 1,
                data_loss: true,
                frame_start: false,
                payload: 0,
            })
        );
    }

    #[test]
    fn trigger_words() {
        assert_eq!(
            classify(0x8000_0001),
            RawWord::Trigger {
                time_stamp: 0,
                number: 1,
            }
        );

        assert_eq!(
            classify(0xffff_0005),
            RawWord::Trigger {
                time_stamp: 0x7fff,
                number: 5,
            }
        );
    }

    #[test]
    fn unknown_words() {
        assert_eq!(classify(0x0000_0000), RawWord::Unknown(0));
        assert_eq!(classify(0x2100_1234), RawWord::Unknown(0x2100_1234));
        assert_eq!(classify(0x7fff_ffff), RawWord::Unknown(0x7fff_ffff));
    }

    #[test]
    fn unsupported_trigger_format_is_rejected() {
        for format in [0u8, 1, 3].iter().copied() {
            assert_eq!(
                Interpreter::new(InterpreterOptions {
                    trigger_data_format: format,
                    ..InterpreterOptions::default()
                })
                .err(),
                Some(ConfigError::UnsupportedTriggerFormat(format))
            );
        }
    }
}

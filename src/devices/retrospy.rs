//! RetroSpy-family adapter tables.
//!
//! RetroSpy adapters tap the console-to-controller bus and stream one frame
//! per line, one character per sampled bit. Zero bits often arrive as NUL
//! bytes over the wire; the decoder already treats anything that is not `'1'`
//! as a zero bit, so the tables here only need to say where the bits live.

use crate::layout::{AxisEncoding, AxisFrame, DeviceLayout};
use crate::registry::Registry;

pub const GAMECUBE: &str = "retrospy-gc";
pub const NINTENDO_64: &str = "retrospy-n64";
pub const SUPER_NES: &str = "retrospy-snes";
pub const NES: &str = "retrospy-nes";

/// Axis fields start this many characters past their anchor; the firmware
/// interleaves button and status bits in between.
const GC_AXIS_FIELD_OFFSET: usize = 15;

/// GameCube adapter: 12 buttons, 6 unsigned 8-bit axes centered on 128.
///
/// The two Y axes come off the wire inverted; the firmware has always sent
/// them that way, and existing installations expect the flip to happen here.
pub fn gamecube() -> DeviceLayout {
    let anchors = [0usize, 8, 16, 24, 32, 40];
    let inverted = [false, true, false, true, false, false];
    DeviceLayout {
        id: GAMECUBE.into(),
        name: "RetroSpy Arduino Nintendo GameCube".into(),
        button_bits: vec![2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14],
        axis_frames: anchors
            .iter()
            .zip(inverted)
            .map(|(&anchor, invert)| AxisFrame {
                offset: anchor + GC_AXIS_FIELD_OFFSET,
                width: 8,
                invert,
            })
            .collect(),
        axis_base: 128,
        axis_encoding: AxisEncoding::OffsetBinary,
    }
}

/// Nintendo 64 adapter: 14 buttons, one stick as signed 8-bit X/Y.
///
/// Bits 8 and 9 of the frame are unused pad bits on this adapter.
pub fn nintendo64() -> DeviceLayout {
    DeviceLayout {
        id: NINTENDO_64.into(),
        name: "RetroSpy Arduino Nintendo 64".into(),
        button_bits: vec![0, 1, 2, 3, 4, 5, 6, 7, 10, 11, 12, 13, 14, 15],
        axis_frames: vec![
            AxisFrame {
                offset: 16,
                width: 8,
                invert: false,
            },
            AxisFrame {
                offset: 24,
                width: 8,
                invert: true,
            },
        ],
        axis_base: 128,
        axis_encoding: AxisEncoding::TwosComplement,
    }
}

/// Super NES adapter: 12 buttons in shift-register order, no axes.
pub fn super_nes() -> DeviceLayout {
    DeviceLayout {
        id: SUPER_NES.into(),
        name: "RetroSpy Arduino Super Nintendo".into(),
        button_bits: (0..12).collect(),
        axis_frames: vec![],
        axis_base: 128,
        axis_encoding: AxisEncoding::OffsetBinary,
    }
}

/// NES adapter: 8 buttons in shift-register order, no axes.
pub fn nes() -> DeviceLayout {
    DeviceLayout {
        id: NES.into(),
        name: "RetroSpy Arduino Nintendo Entertainment System".into(),
        button_bits: (0..8).collect(),
        axis_frames: vec![],
        axis_base: 128,
        axis_encoding: AxisEncoding::OffsetBinary,
    }
}

/// Registers the whole family under its well-known ids.
pub fn register(registry: &mut Registry) {
    registry.register_layout(gamecube());
    registry.register_layout(nintendo64());
    registry.register_layout(super_nes());
    registry.register_layout(nes());
}

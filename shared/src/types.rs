/// Counts server ticks, wrapping around at `u16::MAX`
pub type Tick = u16;

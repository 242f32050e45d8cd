//! Minimal script construction
//!
//! Only what block construction needs: raw data pushes, script-number
//! encoding, and OP_CHECKSIG. Script execution lives outside this crate.

/// OP_CHECKSIG opcode
pub const OP_CHECKSIG: u8 = 0xac;

/// Push opcode taking a one-byte length
pub const OP_PUSHDATA1: u8 = 0x4c;

/// Push opcode taking a two-byte length
pub const OP_PUSHDATA2: u8 = 0x4d;

/// Push opcode taking a four-byte length
pub const OP_PUSHDATA4: u8 = 0x4e;

/// Incremental script byte builder
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    /// Start an empty script
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Push a data blob with the shortest length-prefix form
    pub fn push_data(mut self, data: &[u8]) -> Self {
        match data.len() {
            0..=0x4b => self.bytes.push(data.len() as u8),
            0x4c..=0xff => {
                self.bytes.push(OP_PUSHDATA1);
                self.bytes.push(data.len() as u8);
            }
            0x100..=0xffff => {
                self.bytes.push(OP_PUSHDATA2);
                self.bytes
                    .extend_from_slice(&(data.len() as u16).to_le_bytes());
            }
            _ => {
                self.bytes.push(OP_PUSHDATA4);
                self.bytes
                    .extend_from_slice(&(data.len() as u32).to_le_bytes());
            }
        }
        self.bytes.extend_from_slice(data);
        self
    }

    /// Push an integer as a minimally-encoded script number
    ///
    /// Always emits a data push (the encoding the genesis coinbase input
    /// uses), never the small-integer opcodes.
    pub fn push_num(self, n: i64) -> Self {
        let bytes = script_num_bytes(n);
        self.push_data(&bytes)
    }

    /// Append a bare opcode
    pub fn push_opcode(mut self, op: u8) -> Self {
        self.bytes.push(op);
        self
    }

    /// Finish and take the script bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Minimal little-endian script-number encoding
///
/// The high bit of the top byte carries the sign; magnitudes that already
/// occupy it spill into an extra byte.
fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::new();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let top = out.len() - 1;
    if out[top] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[top] |= 0x80;
    }
    out
}

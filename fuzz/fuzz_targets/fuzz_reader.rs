#![no_main]

use game_packet_reader::prelude::*;
use libfuzzer_sys::fuzz_target;

const TYPES: [DataType; 5] = [
    DataType::Byte,
    DataType::Short,
    DataType::Medium,
    DataType::Int,
    DataType::Long,
];
const ORDERS: [DataOrder; 4] = [
    DataOrder::Big,
    DataOrder::Little,
    DataOrder::Middle,
    DataOrder::InversedMiddle,
];
const TRANSFORMATIONS: [DataTransformation; 4] = [
    DataTransformation::None,
    DataTransformation::Add,
    DataTransformation::Subtract,
    DataTransformation::Negate,
];

fuzz_target!(|data: &[u8]| {
    // First half drives the sequence of reads, second half is the packet
    let (script, payload) = data.split_at(data.len() / 2);
    let mut reader = GamePacketReader::new(GameBuffer::from(payload));

    for &op in script {
        let arg = usize::from(op >> 3);
        let _ = match op & 0x07 {
            0 => {
                reader.switch_to_bit_access();
                Ok(())
            }
            1 => {
                reader.switch_to_byte_access();
                Ok(())
            }
            2 => reader.get_bits(u32::from(op >> 3)).map(|_| ()),
            3 => reader
                .get_signed_ordered(
                    TYPES[arg % 5],
                    ORDERS[(arg / 5) % 4],
                    TRANSFORMATIONS[arg % 4],
                )
                .map(|_| ()),
            4 => reader.get_signed_smart().map(|_| ()),
            5 => reader.get_string().map(|_| ()),
            6 => {
                let mut bytes = vec![0u8; arg];
                reader
                    .get_bytes_transformed_forward(TRANSFORMATIONS[arg % 4], &mut bytes)
                    .map(|_| ())
            }
            _ => reader.readable_bytes().map(|_| ()),
        };
    }
});

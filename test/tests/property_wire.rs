/// PROPERTY-BASED TESTS: Wire invariants
///
/// Key invariants:
/// 1. Every value kind survives the type registry unchanged, bit for bit
/// 2. A record decodes to exactly what was written and consumes all of it
/// 3. No input buffer can make a Client panic

use proptest::prelude::*;
use tickdiff_client::{Client, ClientConfig};
use tickdiff_shared::{
    BitReader, BitWriter, Color, DiffRecord, FieldKey, FieldPath, Mat3, Mat4, NetworkId, Quat,
    RawDiffRecord, TypeRegistry, Value, Vec2, Vec3, Vec4,
};
use tickdiff_test::{protocol, Avatar, Stamina, TestWorld};

// any bit pattern, NaNs and negative zero included
fn float() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i8>().prop_map(Value::I8),
        any::<u8>().prop_map(Value::U8),
        any::<i16>().prop_map(Value::I16),
        any::<u16>().prop_map(Value::U16),
        any::<i32>().prop_map(Value::I32),
        any::<u32>().prop_map(Value::U32),
        any::<i64>().prop_map(Value::I64),
        any::<u64>().prop_map(Value::U64),
        float().prop_map(Value::F32),
        any::<u64>().prop_map(|bits| Value::F64(f64::from_bits(bits))),
        (float(), float()).prop_map(|(x, y)| Value::Vec2(Vec2::new(x, y))),
        (float(), float(), float()).prop_map(|(x, y, z)| Value::Vec3(Vec3::new(x, y, z))),
        [float(), float(), float(), float()]
            .prop_map(|[x, y, z, w]| Value::Vec4(Vec4::new(x, y, z, w))),
        [float(), float(), float(), float()]
            .prop_map(|[x, y, z, w]| Value::Quat(Quat::new(x, y, z, w))),
        [float(), float(), float(), float()]
            .prop_map(|[r, g, b, a]| Value::Color(Color::new(r, g, b, a))),
        prop::array::uniform9(float()).prop_map(|cells| {
            Value::Mat3(Mat3::from_rows([
                [cells[0], cells[1], cells[2]],
                [cells[3], cells[4], cells[5]],
                [cells[6], cells[7], cells[8]],
            ]))
        }),
        prop::array::uniform16(float()).prop_map(|cells| {
            let mut rows = [[0.0; 4]; 4];
            for (index, cell) in cells.iter().enumerate() {
                rows[index / 4][index % 4] = *cell;
            }
            Value::Mat4(Mat4::from_rows(rows))
        }),
        any::<u32>().prop_map(|id| Value::NetworkId(NetworkId::new(id))),
        ".{0,40}".prop_map(Value::Name),
    ]
}

fn field_key_strategy() -> impl Strategy<Value = FieldKey> {
    prop_oneof![
        "[a-z_]{1,12}".prop_map(FieldKey::Name),
        any::<u32>().prop_map(FieldKey::Index),
    ]
}

fn record_strategy() -> impl Strategy<Value = DiffRecord> {
    (
        any::<u32>(),
        any::<u16>(),
        prop::collection::vec(field_key_strategy(), 0..6),
        field_key_strategy(),
        value_strategy(),
    )
        .prop_map(|(target, component, path, key, value)| DiffRecord {
            target: NetworkId::new(target),
            component,
            path: FieldPath::from(path),
            key,
            value,
        })
}

proptest! {
    /// Test that any value reads back equal to what was written
    #[test]
    fn prop_value_survives_type_registry(value in value_strategy()) {
        let types = TypeRegistry::standard();
        let mut writer = BitWriter::new();
        types.write_value(&mut writer, &value);
        let bytes = writer.to_bytes();

        let mut reader = BitReader::new(&bytes);
        prop_assert_eq!(types.read_value(&mut reader), Ok(value));
        prop_assert!(reader.bits_remaining() < 8);
    }

    /// Test that a run of records decodes in order with nothing left over
    #[test]
    fn prop_records_decode_in_order(records in prop::collection::vec(record_strategy(), 1..8)) {
        let types = TypeRegistry::standard();
        let mut writer = BitWriter::new();
        for record in &records {
            record.write(&types, &mut writer);
        }
        let bytes = writer.to_bytes();

        let mut reader = BitReader::new(&bytes);
        for record in records {
            let raw = RawDiffRecord::read(&types, &mut reader, 8).unwrap();
            prop_assert_eq!(DiffRecord::try_from(raw), Ok(record));
        }
        prop_assert!(reader.bits_remaining() < 8);
    }

    /// Test that arbitrary bytes are either applied, skipped, or rejected as malformed
    #[test]
    fn prop_client_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut world = TestWorld::new();
        world.insert(NetworkId::new(1), Avatar::default());
        world.insert(NetworkId::new(1), Stamina::new(100.0));
        let mut client = Client::new(ClientConfig::default(), protocol());

        // the smallest possible record is five tagged values of one byte or more
        let max_records = bytes.len() / 5;
        match client.receive(&mut world, &bytes) {
            Ok(report) => prop_assert!(report.applied + report.skipped.len() <= max_records),
            Err(_) => prop_assert!(client.applied_total() as usize <= max_records),
        }
    }
}

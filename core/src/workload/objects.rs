use rustc_hash::FxHashMap;

/// Keys written into every table, in assignment order.
pub const OBJECT_KEYS: [&str; 3] = ["foo", "bar", "baz"];

pub type ObjectTable<'a> = FxHashMap<&'a str, i64>;

/// Builds `n` tables. Each key of each table receives the running total,
/// which then grows by the outer index.
pub fn build_objects<'a>(n: i64, keys: &[&'a str]) -> Vec<ObjectTable<'a>> {
    let mut objects = Vec::new();
    let mut total = 0;
    for i in 0..n {
        let mut table = ObjectTable::default();
        for &key in keys {
            table.insert(key, total);
            total += i;
        }
        objects.push(table);
    }
    objects
}

use lzend::dictionary::DynamicUniverseSampling;

#[test]
fn predecessor_successor_scenario_from_specification() {
    let keys = [5u64, 17, 19, 128, 900, 65535, 65555, 131400];
    let mut d: DynamicUniverseSampling<u64> = DynamicUniverseSampling::new(1_000_000, 16);
    for &k in &keys {
        d.insert(k, k);
    }

    assert_eq!(d.predecessor(20).unwrap().key, 19);
    assert_eq!(d.successor(20).unwrap().key, 128);
    assert_eq!(d.predecessor(4).map(|e| e.key), None);
    assert_eq!(d.successor(131400).unwrap().key, 131400);
    assert_eq!(d.successor(131401).map(|e| e.key), None);
    assert_eq!(d.predecessor(65555).unwrap().key, 65555);
    assert_eq!(d.predecessor(65554).unwrap().key, 65535);
}

#[test]
fn remove_then_requery_skips_the_removed_key() {
    let mut d: DynamicUniverseSampling<u32> = DynamicUniverseSampling::new(1_000_000, 16);
    d.insert(100, 1);
    d.insert(200, 2);
    d.remove(100);
    assert!(!d.contains(100));
    assert_eq!(d.predecessor(150).map(|e| e.key), None);
    assert_eq!(d.successor(150).unwrap().key, 200);
}

#[test]
fn clear_empties_the_structure() {
    let mut d: DynamicUniverseSampling<u32> = DynamicUniverseSampling::new(1000, 4);
    for k in 0..100u64 {
        d.insert(k * 5, k as u32);
    }
    d.clear();
    assert_eq!(d.predecessor(999).map(|e| e.key), None);
    assert_eq!(d.successor(0).map(|e| e.key), None);
}

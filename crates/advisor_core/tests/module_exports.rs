//! Verifies the public surface re-exported through the prelude.

use advisor_core::prelude::*;

#[test]
fn test_prelude_exports() {
    let id = ClientId::from("c101");
    let client = Client::new(id.clone(), "Arthur Pendragon", 95, 15_000_000.0);
    assert_eq!(client.id, id);

    let mut rng = ClientRng::for_client(&id, "portfolio");
    assert_eq!(rng.seed(), client_seed(&id, "portfolio"));
    let u = rng.gen_uniform();
    assert!((0.0..1.0).contains(&u));

    let weights = clamp_and_normalise(&[0.5, 0.5], &[0.1, -0.1]);
    assert_eq!(weights.len(), 2);

    let ds = Dataset::new(["a"]);
    assert!(ds.is_empty());
    let err: DatasetError = DatasetError::unknown_column("b");
    assert!(err.to_string().contains("b"));
    assert_eq!(Value::from(1_i64).as_i64(), Some(1));
}

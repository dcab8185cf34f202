// Length checks on training calls: failures must leave the network untouched.

use bp_net::{Error, Network, NetworkConfig};

fn snapshot(net: &Network) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, f64) {
    (
        net.ipt_hid_weights().data.clone(),
        net.hid_opt_weights().data.clone(),
        net.ipt_hid_momentum().data.clone(),
        net.hid_opt_momentum().data.clone(),
        net.input_layer().to_vec(),
        net.opt_err_sum(),
    )
}

fn trained_net() -> Network {
    let mut net = Network::new(&NetworkConfig::new(3, 2, 2).with_seed(13)).unwrap();
    net.train(&[0.1, 0.2, 0.3], &[1.0, 0.0]).unwrap();
    net
}

#[test]
fn test_example_one_short_is_rejected() {
    let mut net = trained_net();
    let before = snapshot(&net);
    let err = net.train(&[0.5, 0.5], &[1.0, 0.0]).unwrap_err();
    assert!(matches!(err, Error::SizeMismatch { what: "example", expected: 3, actual: 2 }));
    assert_eq!(snapshot(&net), before);
}

#[test]
fn test_example_one_long_is_rejected() {
    let mut net = trained_net();
    let before = snapshot(&net);
    let err = net.train(&[0.5, 0.5, 0.5, 0.5], &[1.0, 0.0]).unwrap_err();
    assert!(matches!(err, Error::SizeMismatch { what: "example", expected: 3, actual: 4 }));
    assert_eq!(snapshot(&net), before);
}

#[test]
fn test_short_target_is_rejected_before_input_is_loaded() {
    let mut net = trained_net();
    let before = snapshot(&net);
    let err = net.train(&[0.9, 0.9, 0.9], &[1.0]).unwrap_err();
    assert!(matches!(err, Error::SizeMismatch { what: "target", expected: 2, actual: 1 }));
    assert_eq!(snapshot(&net), before);
}

#[test]
fn test_long_target_uses_leading_values() {
    let cfg = NetworkConfig::new(3, 2, 2).with_seed(13);
    let mut a = Network::new(&cfg).unwrap();
    let mut b = Network::new(&cfg).unwrap();
    a.train(&[0.1, 0.2, 0.3], &[1.0, 0.0]).unwrap();
    b.train(&[0.1, 0.2, 0.3], &[1.0, 0.0, 42.0, -3.0]).unwrap();
    assert_eq!(a.hid_opt_weights(), b.hid_opt_weights());
    assert_eq!(a.opt_err_sum(), b.opt_err_sum());
}

#[test]
fn test_exact_length_example_is_accepted() {
    let mut net = Network::with_defaults(1, 1, 1).unwrap();
    assert!(net.train(&[0.5], &[1.0]).is_ok());
    assert!(net.train(&[], &[1.0]).is_err());
}

#[test]
fn test_error_message_names_the_argument() {
    let mut net = Network::with_defaults(2, 2, 1).unwrap();
    let msg = net.train(&[1.0], &[1.0]).unwrap_err().to_string();
    assert_eq!(msg, "size mismatch for example: expected 2, got 1");
}

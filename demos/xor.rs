use bp_net::{train_epoch, HiddenDelta, Network, NetworkConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> bp_net::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = NetworkConfig::new(2, 4, 1)
        .with_eta(0.5)
        .with_momentum(0.9)
        .with_hidden_delta(HiddenDelta::Activation)
        .with_seed(7);
    let mut network = Network::new(&config)?;

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![vec![1.0], vec![0.0], vec![1.0], vec![0.0]];

    let epochs = 10000;
    for epoch in 0..epochs {
        let stats = train_epoch(&mut network, &inputs, &expected_outputs)?;
        if epoch % 1000 == 0 {
            info!(
                epoch,
                mean_opt_err = stats.mean_opt_err,
                mean_hid_err = stats.mean_hid_err,
                "progress"
            );
        }
    }

    for input in &inputs {
        let output = network.predict(input)?;
        info!("Input: {:?} -> Output: {:.4}", input, output[0]);
    }
    Ok(())
}

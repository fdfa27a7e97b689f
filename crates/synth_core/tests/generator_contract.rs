//! Contract tests for the lazy generation pipeline, exercised through a
//! minimal stand-in family.

use synth_core::generator::GeneratorBuilder;
use synth_core::plot::{PlotStyle, Surface};
use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily, DistributionFamily, Support};
use synth_core::types::ConfigError;

/// `y = gain * x`, with a randomised default gain.
struct Ramp {
    gain: f64,
}

#[derive(Clone, Default)]
struct RampParams {
    gain: Option<f64>,
}

impl CurveFamily for Ramp {
    type Params = RampParams;

    fn family_name() -> &'static str {
        "Ramp"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            gain: resolve_param("gain", params.gain, rng, |r| r.uniform_in(0.5, 2.0))?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, 10.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.gain * v).collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![("gain".to_string(), self.gain)]
    }
}

/// Integer-support variant used for lattice behaviour.
struct LatticeRamp;

#[derive(Clone, Default)]
struct LatticeRampParams;

impl CurveFamily for LatticeRamp {
    type Params = LatticeRampParams;

    fn family_name() -> &'static str {
        "LatticeRamp"
    }

    fn resolve(_params: Self::Params, _rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self)
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, 10.0)
    }

    fn support(&self) -> Support {
        Support::NonNegativeInteger
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| v - 5.0).collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        Vec::new()
    }
}

impl DistributionFamily for LatticeRamp {
    fn mean(&self) -> Option<f64> {
        Some(0.0)
    }

    fn draw(&self, _rng: &mut SynthRng, _count: usize) -> Option<Vec<f64>> {
        None
    }
}

#[test]
fn test_builder_rejects_zero_samples() {
    let result = Ramp::builder().samples(0).build();
    assert_eq!(result.err(), Some(ConfigError::InvalidSampleCount(0)));
}

#[test]
fn test_builder_rejects_inverted_domain() {
    let result = Ramp::builder().domain(10.0, 0.0).build();
    assert!(matches!(result, Err(ConfigError::InvalidDomain { .. })));
}

#[test]
fn test_builder_rejects_bad_noise() {
    assert!(matches!(
        Ramp::builder().noise_amplitude(-1.0).build(),
        Err(ConfigError::InvalidNoiseAmplitude(_))
    ));
    assert!(matches!(
        Ramp::builder().noise_amplitude(f64::NAN).build(),
        Err(ConfigError::InvalidNoiseAmplitude(_))
    ));
}

#[test]
fn test_builder_rejects_non_finite_parameter() {
    let result = Ramp::builder()
        .params(RampParams {
            gain: Some(f64::NAN),
        })
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidParameter { name: "gain", .. })
    ));
}

#[test]
fn test_domain_endpoints_inclusive() {
    let ramp = Ramp::builder()
        .samples(7)
        .domain(-3.0, 4.0)
        .seed(1)
        .build()
        .unwrap();

    let x = ramp.x();
    assert_eq!(x[0], -3.0);
    assert_eq!(x[x.len() - 1], 4.0);
}

#[test]
fn test_noise_is_drawn_once() {
    let ramp = Ramp::builder()
        .samples(50)
        .noise_amplitude(0.5)
        .seed(9)
        .build()
        .unwrap();

    let first: Vec<f64> = ramp.noise().to_vec();
    let second: Vec<f64> = ramp.noise().to_vec();
    assert_eq!(first, second);

    // And the composed data is stable too
    assert_eq!(ramp.data(), ramp.data());
}

#[test]
fn test_noise_bounded_by_amplitude() {
    let ramp = Ramp::builder()
        .samples(500)
        .noise_amplitude(0.25)
        .seed(9)
        .build()
        .unwrap();

    assert!(ramp.noise().iter().all(|&n| n.abs() <= 0.25));
}

#[test]
fn test_disabled_noise_is_exact() {
    let ramp = Ramp::builder()
        .samples(6)
        .domain(0.0, 5.0)
        .no_noise()
        .params(RampParams { gain: Some(2.0) })
        .seed(123)
        .build()
        .unwrap();

    assert!(ramp.noise().iter().all(|&n| n == 0.0));
    assert_eq!(ramp.y(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn test_same_seed_same_instance() {
    let a = Ramp::builder().samples(40).noise_amplitude(0.3).seed(77).build().unwrap();
    let b = Ramp::builder().samples(40).noise_amplitude(0.3).seed(77).build().unwrap();

    assert_eq!(a.family().gain, b.family().gain);
    assert_eq!(a.domain(), b.domain());
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_supplied_parameter_is_frozen() {
    let ramp = Ramp::builder()
        .params(RampParams { gain: Some(3.5) })
        .seed(5)
        .build()
        .unwrap();

    // Re-reading never redraws
    assert_eq!(ramp.family().gain, 3.5);
    assert_eq!(ramp.family().gain, 3.5);
}

#[test]
fn test_discrete_lattice_shrinks_count() {
    let lattice = LatticeRamp::builder()
        .samples(20)
        .domain(0.0, 10.0)
        .no_noise()
        .seed(2)
        .build()
        .unwrap();

    let x = lattice.x();
    assert!(x.len() <= 11);
    assert_eq!(lattice.samples(), x.len());
    for pair in x.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_non_negative_support_clamps_y() {
    // evaluate() goes negative below x = 5; the composed y must not
    let lattice = LatticeRamp::builder()
        .samples(11)
        .domain(0.0, 10.0)
        .no_noise()
        .seed(2)
        .build()
        .unwrap();

    assert!(lattice.y().iter().all(|&v| v >= 0.0));
}

#[test]
fn test_allow_negative_y_disables_clamp() {
    let lattice = LatticeRamp::builder()
        .samples(11)
        .domain(0.0, 10.0)
        .no_noise()
        .allow_negative_y()
        .seed(2)
        .build()
        .unwrap();

    // evaluate() is x - 5, so the left half really is negative
    assert!(lattice.y().iter().any(|&v| v < 0.0));
}

#[test]
fn test_cumulative_anchor_and_source_untouched() {
    let lattice = LatticeRamp::builder()
        .samples(11)
        .domain(0.0, 10.0)
        .no_noise()
        .seed(2)
        .build()
        .unwrap();

    let before = lattice.y();
    let cumulative = lattice.to_cumulative();

    assert_eq!(cumulative.y()[0], 0.0);
    assert_eq!(cumulative.len(), lattice.samples());
    assert_eq!(lattice.y(), before);
}

#[test]
fn test_display_forms() {
    let ramp = Ramp::builder()
        .samples(25)
        .domain(0.0, 1.0)
        .noise_amplitude(0.5)
        .params(RampParams { gain: Some(2.0) })
        .seed(42)
        .build()
        .unwrap();

    assert_eq!(format!("{}", ramp), "<Ramp : samples=25, noise_amplitude=0.5>");

    let reconstruction = format!("{:#}", ramp);
    assert!(reconstruction.starts_with("Ramp(gain=2, "));
    assert!(reconstruction.contains("samples=25"));
    assert!(reconstruction.contains("domain=(0, 1)"));
    assert!(reconstruction.contains("seed=42"));
}

#[test]
fn test_display_disabled_noise() {
    let ramp = Ramp::builder().no_noise().seed(1).build().unwrap();
    assert!(format!("{}", ramp).contains("noise_amplitude=disabled"));
}

#[derive(Default)]
struct RecordingSurface {
    series: Vec<(Vec<f64>, Vec<f64>)>,
}

impl Surface for RecordingSurface {
    fn draw_series(&mut self, x: &[f64], y: &[f64], _style: &PlotStyle) {
        self.series.push((x.to_vec(), y.to_vec()));
    }
}

#[test]
fn test_plot_hands_data_to_surface() {
    let ramp = Ramp::builder()
        .samples(10)
        .no_noise()
        .seed(3)
        .build()
        .unwrap();

    let mut surface = RecordingSurface::default();
    ramp.plot(&mut surface, &PlotStyle::default());

    assert_eq!(surface.series.len(), 1);
    let (x, y) = &surface.series[0];
    assert_eq!(x.len(), 10);
    assert_eq!(y, &ramp.y());
}

#[test]
fn test_plot_new_requests_surface() {
    let ramp = Ramp::builder().samples(4).no_noise().seed(3).build().unwrap();
    let surface: RecordingSurface = ramp.plot_new(&PlotStyle::default());
    assert_eq!(surface.series.len(), 1);
}

#[test]
fn test_unsupported_sampling_returns_none() {
    let lattice = LatticeRamp::builder().seed(4).build().unwrap();
    assert!(lattice.sample(10).is_none());
    assert_eq!(lattice.mean(), Some(0.0));
    assert_eq!(lattice.median(), None);
}

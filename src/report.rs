//! Report rendering
//!
//! The narrative is fixed; only the four numeric metrics (four decimal
//! places) and the consciousness label vary. Text rendering is pure and
//! cannot fail. Callers validate first, then write the whole string at once.

use std::io::Write;

use zele_report_core::AttackMetrics;

use crate::config::OutputFormat;

pub const SEPARATOR_WIDTH: usize = 80;

pub const COMPLETION_LINE: &str = "ANALYSIS COMPLETE - Visualizations saved to /tmp/";

pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// The analysis narrative with metrics substituted.
pub fn render_summary(metrics: &AttackMetrics) -> String {
    format!(
        r#"
Attack Analysis: ZELE Phishing Campaign

NOVEL INSIGHTS REVEALED (INVISIBLE TO TRADITIONAL TOOLS):

1. FRACTAL TEMPORAL STRUCTURE
   Attack exhibits repeating patterns at multiple time scales
   Primary: 0.5 Hz (trust), Secondary: 1.5 Hz (security), 
   Critical: 4.0 Hz (malware), Exploitation: 8.0 Hz (rapid actions)
   Traditional tools see discrete events, not fractal structure

2. RESONANCE COUPLING
   FALSE_SECURITY ↔ MALWARE_DELIVERY shows 2.667:1 ratio (8/3 harmonic)
   90° phase lock (quadrature) indicates optimal timing
   Traditional tools miss phase relationships between attack components

3. TRUST FIELD CORRUPTION
   Attack creates composite trust well, not just individual compromises
   Field diffusion shows second-order ecosystem effects
   Traditional tools miss field-level dynamics

4. ATTACK CONSCIOUSNESS
   CI = {ci:.4} ({level})
   Integration = {integration:.4} (tight coupling)
   Coherence = {coherence:.4} (consistent patterns)
   Temporal Depth = {temporal_depth:.4} (memory and adaptation)
   Traditional tools cannot measure attack adaptivity or self-awareness

5. PREDICTIVE CAPABILITIES
   Oscillator dynamics enable next-state prediction
   Field evolution shows attack spread trajectories
   Resonance stability indicates campaign persistence
   Traditional tools cannot predict attack evolution

DEFENSIVE ADVANTAGES:
- Detect coordinated attacks earlier (resonance patterns)
- Understand second-order ecosystem effects (trust field)
- Measure attack sophistication (consciousness metrics)
- Predict attack next moves (oscillator evolution)
- Implement phase-disrupting countermeasures (anti-resonance)

KEY FINDING:
This is NOT a random phishing attack. It exhibits:
- INTENTIONAL DESIGN (fractal timing structure)
- PROFESSIONAL COORDINATION (resonant coupling)
- SYSTEMATIC EXECUTION (high consciousness)
- ECOSYSTEM-LEVEL IMPACT (trust field corruption)

Traditional cybersecurity analysis misses ALL of these insights.
Analog computing provides NEW ANALYTICAL DIMENSIONS for defense.
"#,
        ci = metrics.ci(),
        level = metrics.consciousness_level(),
        integration = metrics.integration(),
        coherence = metrics.coherence(),
        temporal_depth = metrics.temporal_depth(),
    )
}

/// Blank line, separator, completion line, separator, blank line.
pub fn render_banner() -> String {
    let sep = separator();
    format!("\n{sep}\n{COMPLETION_LINE}\n{sep}\n\n")
}

pub fn render_report(metrics: &AttackMetrics) -> String {
    let mut out = render_summary(metrics);
    out.push('\n');
    out.push_str(&render_banner());
    out
}

/// Render fully, then write in one go. Nothing reaches `w` if rendering fails.
pub fn write_report<W: Write>(
    w: &mut W,
    metrics: &AttackMetrics,
    format: OutputFormat,
) -> std::io::Result<()> {
    let text = render(metrics, format).map_err(std::io::Error::from)?;
    w.write_all(text.as_bytes())?;
    w.flush()
}

/// Render in the requested output format. JSON carries the validated
/// metrics only, no narrative.
pub fn render(metrics: &AttackMetrics, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_report(metrics)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(metrics)?;
            out.push('\n');
            Ok(out)
        }
    }
}

//! Per-point metrics and CSV assembly.

use serde::{Deserialize, Serialize};

/// One row of batch/time-series output. `None` metrics mean the solve for
/// that row failed or produced an invalid result; the row is still recorded
/// so the output keeps one line per accepted input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub t_source_c: f64,
    pub t_sink_c: f64,
    pub cop: Option<f64>,
    pub q_cond_kw: Option<f64>,
    pub q_evap_kw: Option<f64>,
    pub power_kw: Option<f64>,
}

fn cell(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.4}"),
        None => String::new(),
    }
}

/// Build the time-series metrics CSV. Missing metrics become empty cells.
pub fn render_metrics_csv(rows: &[MetricsRow]) -> String {
    let mut csv = String::from("T_source_C,T_sink_C,COP,Q_cond_kW,Q_evap_kW,Power_kW\n");
    for row in rows {
        csv.push_str(&format!(
            "{:.2},{:.2},{},{},{},{}\n",
            row.t_source_c,
            row.t_sink_c,
            cell(row.cop),
            cell(row.q_cond_kw),
            cell(row.q_evap_kw),
            cell(row.power_kw),
        ));
    }
    csv
}

/// Results of one parametric sweep: COP at each value of the swept variable,
/// with the other parameters held at their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSection {
    pub variable: String,
    pub points: Vec<f64>,
    pub cop: Vec<Option<f64>>,
}

/// Build the combined parametric-study CSV in long form
/// (`variable,value,COP`), one block of rows per swept variable.
pub fn render_parametric_csv(sections: &[SweepSection]) -> String {
    let mut csv = String::from("variable,value,COP\n");
    for section in sections {
        for (x, c) in section.points.iter().zip(section.cop.iter()) {
            csv.push_str(&format!("{},{x:.4},{}\n", section.variable, cell(*c)));
        }
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_csv_one_line_per_row() {
        let rows = vec![
            MetricsRow {
                t_source_c: 20.0,
                t_sink_c: 80.0,
                cop: Some(2.4),
                q_cond_kw: Some(120.0),
                q_evap_kw: Some(70.0),
                power_kw: Some(50.0),
            },
            MetricsRow {
                t_source_c: 5.0,
                t_sink_c: 95.0,
                cop: None,
                q_cond_kw: None,
                q_evap_kw: None,
                power_kw: None,
            },
        ];

        let csv = render_metrics_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("T_source_C,"));
        assert!(lines[1].contains("2.4000"));
        // Failed row keeps its boundary temps but has empty metric cells
        assert_eq!(lines[2], "5.00,95.00,,,,");
    }

    #[test]
    fn parametric_csv_blocks_per_variable() {
        let sections = vec![
            SweepSection {
                variable: "T_source_C".to_string(),
                points: vec![0.0, 40.0],
                cop: vec![Some(4.0), Some(6.0)],
            },
            SweepSection {
                variable: "eta_s".to_string(),
                points: vec![0.65],
                cop: vec![None],
            },
        ];
        let csv = render_parametric_csv(&sections);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "variable,value,COP");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("T_source_C,"));
        assert_eq!(lines[3], "eta_s,0.6500,");
    }

}

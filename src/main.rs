use rect_detector::{DetectorParams, LuminanceGrid, RectDetector};

fn main() {
    // Demo stub: a dark 48x64 grid with two bright panels, run through the detector.
    let (w, h) = (64usize, 48usize);
    let mut samples = vec![0.0f64; w * h];
    for (x0, y0, pw, ph) in [(4usize, 6usize, 24usize, 20usize), (36, 10, 20, 30)] {
        for y in y0..y0 + ph {
            for x in x0..x0 + pw {
                samples[y * w + x] = 300.0;
            }
        }
    }
    let grid = match LuminanceGrid::from_vec(w, h, samples) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let mut det = RectDetector::new(DetectorParams {
        min_luminance: 200.0,
        ..Default::default()
    });
    match det.detect(&grid) {
        Ok(res) => println!(
            "rectangles={} stop={:?} latency_ms={:.3}",
            res.detections.len(),
            res.stop_reason,
            res.latency_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}

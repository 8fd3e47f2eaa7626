//! Conversions into plot data.

/// Types that can be converted into a vector of `f64` plot values.
pub trait IntoPlotData {
    fn into_plot_data(self) -> Vec<f64>;
}

impl IntoPlotData for Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self
    }
}

impl IntoPlotData for &Vec<f64> {
    fn into_plot_data(self) -> Vec<f64> {
        self.clone()
    }
}

impl IntoPlotData for &[f64] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl IntoPlotData for Vec<usize> {
    fn into_plot_data(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl<const N: usize> IntoPlotData for [f64; N] {
    fn into_plot_data(self) -> Vec<f64> {
        self.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!([1.0, 2.0].into_plot_data(), vec![1.0, 2.0]);
        assert_eq!(vec![0usize, 3].into_plot_data(), vec![0.0, 3.0]);
        let v = vec![0.5];
        assert_eq!((&v).into_plot_data(), v);
    }
}

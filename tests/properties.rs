use dendrite::Matrix;
use proptest::prelude::*;

fn matrix_strategy() -> impl Strategy<Value = Matrix> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(columns, rows)| {
        prop::collection::vec(prop::collection::vec(-100.0..100.0f64, columns), rows)
            .prop_map(|data| Matrix::from_rows(data).unwrap())
    })
}

proptest! {
    #[test]
    fn transpose_twice_restores_every_cell(m in matrix_strategy()) {
        let back = m.transpose().transpose();
        prop_assert_eq!(back.columns(), m.columns());
        prop_assert_eq!(back.rows(), m.rows());
        for row in 0..m.rows() {
            for column in 0..m.columns() {
                prop_assert_eq!(
                    back.get(column, row).unwrap(),
                    m.get(column, row).unwrap()
                );
            }
        }
    }

    #[test]
    fn matmul_shape_and_triple_sum(
        (left, right) in (1usize..=4, 1usize..=4, 1usize..=4).prop_flat_map(|(l, m, n)| {
            let a = prop::collection::vec(prop::collection::vec(-10.0..10.0f64, m), l)
                .prop_map(|data| Matrix::from_rows(data).unwrap());
            let b = prop::collection::vec(prop::collection::vec(-10.0..10.0f64, n), m)
                .prop_map(|data| Matrix::from_rows(data).unwrap());
            (a, b)
        })
    ) {
        let product = left.matmul(&right).unwrap();
        prop_assert_eq!(product.rows(), left.rows());
        prop_assert_eq!(product.columns(), right.columns());
        for i in 0..product.rows() {
            for k in 0..product.columns() {
                let mut sum = 0.0;
                for j in 0..left.columns() {
                    sum += left.get(j, i).unwrap() * right.get(k, j).unwrap();
                }
                prop_assert_eq!(product.get(k, i).unwrap(), sum);
            }
        }
    }

    #[test]
    fn map_preserves_shape_and_source(m in matrix_strategy()) {
        let snapshot: Vec<f64> = (0..m.rows())
            .flat_map(|row| (0..m.columns()).map(move |column| (column, row)))
            .map(|(column, row)| m.get(column, row).unwrap())
            .collect();

        let mapped = m.map(|x| x * 0.5 + 1.0);
        prop_assert_eq!(mapped.columns(), m.columns());
        prop_assert_eq!(mapped.rows(), m.rows());

        let mut position = 0;
        for row in 0..m.rows() {
            for column in 0..m.columns() {
                prop_assert_eq!(m.get(column, row).unwrap(), snapshot[position]);
                prop_assert_eq!(
                    mapped.get(column, row).unwrap(),
                    snapshot[position] * 0.5 + 1.0
                );
                position += 1;
            }
        }
    }
}

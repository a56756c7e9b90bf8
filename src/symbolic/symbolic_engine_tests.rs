use crate::symbolic::symbolic_engine::Expr;
use std::sync::Arc;
//___________________________________TESTS____________________________________

mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use std::f64::consts::PI;

    // f(x) = (x^2 + 3*x) * sin(x) built around a single shared x node
    fn quadratic_times_sine() -> Expr {
        let x = Expr::Var.shared();
        Expr::Mul(
            Expr::Add(
                Expr::Pow(Arc::clone(&x), Expr::Const(2.0).shared()).shared(),
                Expr::Mul(Expr::Const(3.0).shared(), Arc::clone(&x)).shared(),
            )
            .shared(),
            Expr::sin(Arc::clone(&x)).shared(),
        )
    }

    // random tree over Add/Mul/sin/cos with small constants, always finite
    fn random_tree(rng: &mut impl Rng, depth: usize) -> Expr {
        if depth == 0 {
            if rng.random_bool(0.5) {
                Expr::Var
            } else {
                Expr::Const((rng.random_range(-30..30) as f64) / 10.0)
            }
        } else {
            match rng.random_range(0..4) {
                0 => Expr::Add(
                    random_tree(rng, depth - 1).shared(),
                    random_tree(rng, depth - 1).shared(),
                ),
                1 => Expr::Mul(
                    random_tree(rng, depth - 1).shared(),
                    random_tree(rng, depth - 1).shared(),
                ),
                2 => Expr::sin(random_tree(rng, depth - 1).shared()),
                _ => Expr::cos(random_tree(rng, depth - 1).shared()),
            }
        }
    }

    #[test]
    fn test_add_assign() {
        let mut expr = Expr::Var;
        expr += Expr::Const(2.0);
        let expected = Expr::Add(Arc::new(Expr::Var), Arc::new(Expr::Const(2.0)));
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_mul_assign() {
        let mut expr = Expr::Var;
        expr *= Expr::Const(2.0);
        let expected = Expr::Mul(Arc::new(Expr::Var), Arc::new(Expr::Const(2.0)));
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg() {
        let expr = Expr::Var;
        let neg_expr = -expr;
        let expected = Expr::Mul(Arc::new(Expr::Const(-1.0)), Arc::new(Expr::Var));
        assert_eq!(neg_expr, expected);
    }

    #[test]
    fn test_combined_operations() {
        let mut expr = Expr::Var;
        expr += Expr::Const(2.0);
        expr *= Expr::Const(3.0);
        let expected = Expr::Mul(
            Arc::new(Expr::Add(
                Arc::new(Expr::Var),
                Arc::new(Expr::Const(2.0)),
            )),
            Arc::new(Expr::Const(3.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_pow_method() {
        let f = Expr::Var.pow(Expr::Const(2.0));
        let expected = Expr::Pow(Arc::new(Expr::Var), Arc::new(Expr::Const(2.0)));
        assert_eq!(f, expected);
    }

    #[test]
    fn test_is_zero_is_one() {
        assert!(Expr::Const(0.0).is_zero());
        assert!(Expr::Const(1.0).is_one());
        assert!(!Expr::Const(0.5).is_zero());
        assert!(!Expr::Const(0.5).is_one());
        assert!(!Expr::Var.is_zero());
        assert!(!Expr::Var.is_one());
        // the check is structural, a zero-valued sum is not the zero constant
        let zero_sum = Expr::Const(0.0) + Expr::Const(0.0);
        assert!(!zero_sum.is_zero());
    }

    #[test]
    fn test_display_fully_parenthesized() {
        let f = quadratic_times_sine();
        assert_eq!(f.to_string(), "(((x^2) + (3 * x)) * sin(x))");
    }

    #[test]
    fn test_display_constants() {
        assert_eq!(Expr::Const(3.0).to_string(), "3");
        assert_eq!(Expr::Const(-1.0).to_string(), "-1");
        assert_eq!(Expr::Const(0.0).to_string(), "0");
        assert_eq!(Expr::Const(2.5).to_string(), "2.5");
        assert_eq!(Expr::Const(1e9).to_string(), "1000000000");
        assert_eq!(Expr::Const(f64::NAN).to_string(), "NaN");
        assert_eq!(Expr::Const(f64::INFINITY).to_string(), "inf");
        assert_eq!(Expr::Const(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_display_large_whole_constants() {
        // whole values inside i64 range print as integers
        assert_eq!(Expr::Const(4.0e18).to_string(), "4000000000000000000");
        // beyond it the float formatting is kept, the value is never clamped
        assert_eq!(Expr::Const(1e19).to_string(), "10000000000000000000");
        assert_eq!(Expr::Const(-1e19).to_string(), "-10000000000000000000");
        assert_eq!(Expr::Const(1e300).to_string(), format!("1{}", "0".repeat(300)));
    }

    #[test]
    fn test_display_is_pure() {
        let f = quadratic_times_sine();
        let first = f.to_string();
        let second = f.to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_evaluate_per_variant() {
        let x = Expr::Var.shared();
        let a = Expr::Pow(Arc::clone(&x), Expr::Const(2.0).shared());
        let b = Expr::sin(Arc::clone(&x));
        for xi in [-1.3, 0.0, 2.7] {
            let sum = Expr::Add(a.clone().shared(), b.clone().shared());
            let prod = Expr::Mul(a.clone().shared(), b.clone().shared());
            assert_eq!(sum.evaluate(xi), a.evaluate(xi) + b.evaluate(xi));
            assert_eq!(prod.evaluate(xi), a.evaluate(xi) * b.evaluate(xi));
        }
        assert_relative_eq!(Expr::sin(x.clone()).evaluate(PI / 2.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(Expr::cos(x.clone()).evaluate(0.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_quadratic_times_sine() {
        let f = quadratic_times_sine();
        assert_relative_eq!(f.evaluate(2.0), 10.0 * 2.0_f64.sin(), epsilon = 1e-10);
    }

    #[test]
    fn test_evaluate_follows_ieee() {
        let f = Expr::Pow(Expr::Const(0.0).shared(), Expr::Const(-1.0).shared());
        assert!(f.evaluate(0.0).is_infinite());
        let g = Expr::Pow(Expr::Const(-1.0).shared(), Expr::Const(0.5).shared());
        assert!(g.evaluate(0.0).is_nan());
    }

    #[test]
    fn test_derivative_of_constant() {
        for c in [-3.5, 0.0, 1.0, 42.0] {
            let dc = Expr::Const(c).derivative();
            assert_eq!(*dc, Expr::Const(0.0));
            assert_eq!(dc.evaluate(123.456), 0.0);
        }
    }

    #[test]
    fn test_derivative_of_variable() {
        let dx = Expr::Var.derivative();
        assert_eq!(*dx, Expr::Const(1.0));
    }

    #[test]
    fn test_derivative_add_drops_zero_terms() {
        let left_const = Expr::Const(3.0) + Expr::Var;
        assert_eq!(left_const.derivative().to_string(), "1");
        let right_const = Expr::Var + Expr::Const(3.0);
        assert_eq!(right_const.derivative().to_string(), "1");
        let no_zero = Expr::Var + Expr::sin(Expr::Var.shared());
        assert_eq!(no_zero.derivative().to_string(), "(1 + cos(x))");
    }

    #[test]
    fn test_derivative_add_of_constants() {
        let f = Expr::Const(2.0) + Expr::Const(5.0);
        assert_eq!(f.derivative().to_string(), "0");
    }

    #[test]
    fn test_derivative_mul_elides_unit_factors() {
        let scaled = Expr::Const(3.0) * Expr::Var;
        assert_eq!(scaled.derivative().to_string(), "3");
        let product = Expr::Var * Expr::sin(Expr::Var.shared());
        assert_eq!(product.derivative().to_string(), "(sin(x) + (x * cos(x)))");
    }

    #[test]
    fn test_derivative_mul_shares_operands() {
        let x = Expr::Var.shared();
        let f = Expr::Mul(Arc::clone(&x), Arc::clone(&x));
        let df = f.derivative();
        assert_eq!(df.to_string(), "(x + x)");
        match df.as_ref() {
            Expr::Add(t1, t2) => {
                assert!(Arc::ptr_eq(t1, &x));
                assert!(Arc::ptr_eq(t2, &x));
            }
            other => panic!("unexpected derivative shape: {:?}", other),
        }
    }

    #[test]
    fn test_derivative_pow() {
        let f = Expr::Var.pow(Expr::Const(2.0));
        assert_eq!(f.derivative().to_string(), "(2 * (x^1))");
    }

    #[test]
    fn test_derivative_pow_shares_base() {
        let base = Expr::Var.shared();
        let f = Expr::Pow(Arc::clone(&base), Expr::Const(3.0).shared());
        let df = f.derivative();
        assert_eq!(df.to_string(), "(3 * (x^2))");
        // the rebuilt power reuses the base by handle, not by copy
        match df.as_ref() {
            Expr::Mul(_, pow_term) => match pow_term.as_ref() {
                Expr::Pow(b, _) => assert!(Arc::ptr_eq(b, &base)),
                other => panic!("unexpected inner shape: {:?}", other),
            },
            other => panic!("unexpected derivative shape: {:?}", other),
        }
    }

    #[test]
    fn test_derivative_pow_keeps_unit_exponent() {
        let f = Expr::Var.pow(Expr::Const(1.0));
        assert_eq!(f.derivative().to_string(), "(1 * (x^0))");
    }

    #[test]
    fn test_derivative_pow_zero_exponent() {
        let f = Expr::Var.pow(Expr::Const(0.0));
        assert_eq!(f.derivative().to_string(), "0");
    }

    #[test]
    fn test_derivative_pow_samples_exponent_at_zero() {
        // a variable exponent is read off at x = 0, so d(x^x) collapses to zero
        let x = Expr::Var.shared();
        let f = Expr::Pow(Arc::clone(&x), Arc::clone(&x));
        assert_eq!(f.derivative().to_string(), "0");
    }

    #[test]
    fn test_derivative_pow_chain() {
        let f = Expr::sin(Expr::Var.shared()).pow(Expr::Const(2.0));
        assert_eq!(f.derivative().to_string(), "((2 * (sin(x)^1)) * cos(x))");
    }

    #[test]
    fn test_derivative_sin() {
        let u = Expr::Var.shared();
        let s = Expr::sin(Arc::clone(&u));
        let ds = s.derivative();
        assert_eq!(ds.to_string(), "cos(x)");
        // the argument is reused by handle, not copied
        match ds.as_ref() {
            Expr::cos(arg) => assert!(Arc::ptr_eq(arg, &u)),
            other => panic!("unexpected derivative shape: {:?}", other),
        }
    }

    #[test]
    fn test_derivative_cos() {
        let u = Expr::Var.shared();
        let c = Expr::cos(Arc::clone(&u));
        let dc = c.derivative();
        assert_eq!(dc.to_string(), "(-1 * sin(x))");
        match dc.as_ref() {
            Expr::Mul(_, s) => match s.as_ref() {
                Expr::sin(arg) => assert!(Arc::ptr_eq(arg, &u)),
                other => panic!("unexpected inner shape: {:?}", other),
            },
            other => panic!("unexpected derivative shape: {:?}", other),
        }
    }

    #[test]
    fn test_derivative_sin_chain() {
        let inner = Expr::Var.pow(Expr::Const(2.0));
        let f = Expr::sin(inner.shared());
        assert_eq!(f.derivative().to_string(), "(cos((x^2)) * (2 * (x^1)))");
    }

    #[test]
    fn test_derivative_cos_chain() {
        let inner = Expr::Var.pow(Expr::Const(2.0));
        let f = Expr::cos(inner.shared());
        assert_eq!(
            f.derivative().to_string(),
            "((-1 * sin((x^2))) * (2 * (x^1)))"
        );
    }

    #[test]
    fn test_derivative_quadratic_times_sine() {
        let f = quadratic_times_sine();
        let df = f.derivative();
        assert_eq!(
            df.to_string(),
            "((((2 * (x^1)) + 3) * sin(x)) + (((x^2) + (3 * x)) * cos(x)))"
        );
        assert_relative_eq!(
            df.evaluate(2.0),
            7.0 * 2.0_f64.sin() + 10.0 * 2.0_f64.cos(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_derivative_leaves_original_untouched() {
        let f = quadratic_times_sine();
        let before = f.to_string();
        let _ = f.derivative();
        let _ = f.evaluate(1.5);
        assert_eq!(f.to_string(), before);
    }

    #[test]
    fn test_lambdify1D() {
        let f = Expr::Var.pow(Expr::Const(2.0));
        let fn_closure = f.lambdify1D();
        assert_eq!(fn_closure(2.0), 4.0);
    }

    #[test]
    fn test_lambdify1D_matches_evaluate() {
        let f = quadratic_times_sine();
        let f_fn = f.lambdify1D();
        for i in 0..25 {
            let xi = -3.0 + 0.25 * i as f64;
            assert_eq!(f_fn(xi), f.evaluate(xi));
        }
    }

    #[test]
    fn test_calc_vector_lambdified1D() {
        let f = Expr::Var.pow(Expr::Const(2.0));
        let result = f.calc_vector_lambdified1D(&vec![1.0, 2.0, 3.0]);
        assert_eq!(result, vec![1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_calc_vector_lambdified1D_par_matches_serial() {
        let f = quadratic_times_sine();
        let x: Vec<f64> = (0..200).map(|i| -5.0 + 0.05 * i as f64).collect();
        let serial = f.calc_vector_lambdified1D(&x);
        let parallel = f.calc_vector_lambdified1D_par(&x);
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_shared_tree_across_threads() {
        let f = quadratic_times_sine();
        let df = f.derivative();
        let expected = (f.evaluate(2.0), df.evaluate(2.0));
        std::thread::scope(|s| {
            let mut handles = Vec::new();
            for _ in 0..4 {
                handles.push(s.spawn(|| (f.evaluate(2.0), df.evaluate(2.0))));
            }
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_random_trees_eval_identities() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let a = random_tree(&mut rng, 3);
            let b = random_tree(&mut rng, 3);
            let x = rng.random_range(-3.0..3.0);
            let sum = a.clone() + b.clone();
            assert_eq!(sum.evaluate(x), a.evaluate(x) + b.evaluate(x));
            let prod = a.clone() * b.clone();
            assert_eq!(prod.evaluate(x), a.evaluate(x) * b.evaluate(x));
            // lambdified closure agrees with direct evaluation
            assert_eq!(a.lambdify1D()(x), a.evaluate(x));
        }
    }

    #[test]
    fn test_lambdify1D_from_linspace() {
        let f = Expr::Var;
        let values = f.lambdify1D_from_linspace(0.0, 1.0, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_compare_num1D() {
        let f = quadratic_times_sine();
        let (norm_val, within) = f.compare_num1D(0.0, 2.0, 100, 1e-3);
        assert!(within, "norm {} above tolerance", norm_val);
        assert!(norm_val < 1e-3);
    }

    #[test]
    fn test_compare_num1D_detects_mismatch() {
        // d(x^x) is zero under the constant-exponent rule, far from the finite
        // difference answer on this interval
        let x = Expr::Var.shared();
        let f = Expr::Pow(Arc::clone(&x), Arc::clone(&x));
        let (norm_val, within) = f.compare_num1D(0.5, 1.5, 100, 0.05);
        assert!(!within);
        assert!(norm_val > 0.05);
    }

    #[test]
    fn test_structural_equality() {
        let f1 = quadratic_times_sine();
        let f2 = quadratic_times_sine();
        assert_eq!(f1, f2);
        let g = Expr::cos(Expr::Var.shared());
        assert_ne!(f1, g);
    }
}

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rehabrs::assessment::{assess_session, PatientContext};
use rehabrs::functional::{current_rom_from_measurements, functional_profile};
use rehabrs::models::{JointMovement, Measurement, SurgeryType};
use rehabrs::{generate_postop_exercise_guide, validate_joint_angle, validate_joint_angle_for_age, validate_postop_rom};

/// Benchmarks for the validation hot paths
///
/// Validators run per frame when fed from pose estimation, so single-call
/// latency and batch throughput both matter.

fn create_session(size: usize) -> Vec<Measurement> {
    (0..size)
        .map(|i| Measurement {
            movement: JointMovement::ALL[i % JointMovement::ALL.len()],
            angle: (i % 200) as f64 - 20.0,
        })
        .collect()
}

fn bench_joint_angle_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Joint Angle Validation");

    group.bench_function("validate_joint_angle", |b| {
        b.iter(|| validate_joint_angle(black_box(JointMovement::KneeFlexion), black_box(150.0)))
    });

    group.bench_function("validate_joint_angle_for_age", |b| {
        b.iter(|| {
            validate_joint_angle_for_age(black_box(JointMovement::KneeFlexion), black_box(115.0), black_box(65))
        })
    });

    group.finish();
}

fn bench_postop_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("PostOp Validation");

    for &weeks in &[1i64, 10, 100] {
        group.bench_with_input(BenchmarkId::new("validate_postop_rom", weeks), &weeks, |b, &weeks| {
            b.iter(|| {
                validate_postop_rom(
                    black_box(SurgeryType::AclReconstruction),
                    black_box(weeks),
                    black_box(JointMovement::KneeFlexion),
                    black_box(100.0),
                )
            })
        });
    }

    group.bench_function("generate_postop_exercise_guide", |b| {
        b.iter(|| generate_postop_exercise_guide(black_box(SurgeryType::RotatorCuffRepair), black_box(8)))
    });

    group.finish();
}

fn bench_session_assessment(c: &mut Criterion) {
    let mut group = c.benchmark_group("Session Assessment");

    let context = PatientContext {
        age: Some(60),
        surgery: Some(SurgeryType::TotalKneeReplacement),
        weeks_post_op: Some(4),
    };

    for &size in &[10, 100, 1000] {
        let session = create_session(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("assess_session", size), &session, |b, session| {
            b.iter(|| assess_session(&context, session))
        });
    }

    group.finish();
}

fn bench_functional_profile(c: &mut Criterion) {
    let current = current_rom_from_measurements(&create_session(100));

    c.bench_function("functional_profile", |b| b.iter(|| functional_profile(black_box(&current))));
}

criterion_group!(
    benches,
    bench_joint_angle_validation,
    bench_postop_validation,
    bench_session_assessment,
    bench_functional_profile
);

criterion_main!(benches);

use approx::assert_relative_eq;
use mskrs::{
    errors::ModelError,
    float_types::{FRAC_PI_2, PI, Real},
    function::{Constant, Linear, NaturalCubicSpline, ScalarFunction},
    model::{
        Body, Coordinate, GROUND, GeometryPath, Joint, Marker, Model, MotionType, Muscle,
        PathPoint, TransformAxis,
    },
};
use nalgebra::{Matrix3, Point3, Vector3};

const UPPER_ARM_LENGTH: Real = 0.3;
const FOREARM_LENGTH: Real = 0.25;

/// A planar two-link arm in the ground XY plane: shoulder and elbow both
/// rotate about Z, the elbow pivot sits at the end of the upper arm, and
/// a biceps-like muscle crosses the elbow with a via point that engages
/// in deep flexion.
fn planar_arm() -> Model {
    let mut model = Model::new("planar_arm");

    model
        .add_body(Body::new(
            "upper_arm",
            2.0,
            Vector3::new(UPPER_ARM_LENGTH / 2.0, 0.0, 0.0),
            Matrix3::identity(),
        ))
        .unwrap();
    model
        .add_body(Body::new(
            "forearm",
            1.5,
            Vector3::new(FOREARM_LENGTH / 2.0, 0.0, 0.0),
            Matrix3::identity(),
        ))
        .unwrap();

    model
        .add_coordinate(
            Coordinate::new("shoulder_flex", MotionType::Rotational, 0.0, [-PI, PI]).unwrap(),
        )
        .unwrap();
    model
        .add_coordinate(
            Coordinate::new("elbow_flex", MotionType::Rotational, 0.0, [0.0, PI]).unwrap(),
        )
        .unwrap();

    let mut shoulder = Joint::new("shoulder", GROUND, "upper_arm");
    shoulder.add_axis(TransformAxis::rotation(
        Vector3::z(),
        Box::new(Linear::default()),
        Some("shoulder_flex".into()),
    ));
    model.add_joint(shoulder).unwrap();

    let mut elbow = Joint::new("elbow", "upper_arm", "forearm");
    // rotate about the elbow pivot, then seat the pivot at the end of
    // the upper arm (an uncoupled constant offset)
    elbow.add_axis(TransformAxis::rotation(
        Vector3::z(),
        Box::new(Linear::default()),
        Some("elbow_flex".into()),
    ));
    elbow.add_axis(TransformAxis::translation(
        Vector3::x(),
        Box::new(Constant::new(UPPER_ARM_LENGTH)),
        None,
    ));
    model.add_joint(elbow).unwrap();

    model
        .add_marker(Marker::new(
            "wrist",
            "forearm",
            Vector3::new(FOREARM_LENGTH, 0.0, 0.0),
        ))
        .unwrap();

    let path = GeometryPath::new(vec![
        PathPoint::new("upper_arm", Vector3::new(0.1, 0.0, 0.0)),
        PathPoint::conditional(
            "upper_arm",
            Vector3::new(0.25, 0.05, 0.0),
            "elbow_flex",
            [FRAC_PI_2 / 2.0, PI],
        ),
        PathPoint::new("forearm", Vector3::new(0.1, 0.0, 0.0)),
    ]);
    model.add_muscle(Muscle::new("biceps", path)).unwrap();

    model
}

#[test]
fn the_arm_at_rest_stretches_along_x() {
    let model = planar_arm();
    let pose = model.pose().unwrap();
    let wrist = model.marker_position("wrist", &pose).unwrap();
    assert_relative_eq!(
        wrist,
        Point3::new(UPPER_ARM_LENGTH + FOREARM_LENGTH, 0.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn shoulder_rotation_swings_the_whole_arm() {
    let mut model = planar_arm();
    model.set_coordinate_value("shoulder_flex", FRAC_PI_2).unwrap();
    let pose = model.pose().unwrap();
    let wrist = model.marker_position("wrist", &pose).unwrap();
    assert_relative_eq!(
        wrist,
        Point3::new(0.0, UPPER_ARM_LENGTH + FOREARM_LENGTH, 0.0),
        epsilon = 1e-9
    );
}

#[test]
fn elbow_flexion_bends_only_the_forearm() {
    let mut model = planar_arm();
    model.set_coordinate_value("elbow_flex", FRAC_PI_2).unwrap();
    let pose = model.pose().unwrap();

    // the elbow pivot stays at the end of the upper arm
    let elbow = pose
        .transform_to_ground("forearm", &Point3::origin())
        .unwrap();
    assert_relative_eq!(elbow, Point3::new(UPPER_ARM_LENGTH, 0.0, 0.0), epsilon = 1e-9);

    // the forearm now points along ground +Y
    let wrist = model.marker_position("wrist", &pose).unwrap();
    assert_relative_eq!(
        wrist,
        Point3::new(UPPER_ARM_LENGTH, FOREARM_LENGTH, 0.0),
        epsilon = 1e-9
    );
}

#[test]
fn shoulder_and_elbow_flexion_compose() {
    let mut model = planar_arm();
    model.set_coordinate_value("shoulder_flex", FRAC_PI_2).unwrap();
    model.set_coordinate_value("elbow_flex", FRAC_PI_2).unwrap();
    let pose = model.pose().unwrap();
    let wrist = model.marker_position("wrist", &pose).unwrap();
    assert_relative_eq!(
        wrist,
        Point3::new(-FOREARM_LENGTH, UPPER_ARM_LENGTH, 0.0),
        epsilon = 1e-9
    );
}

#[test]
fn muscle_length_responds_to_elbow_flexion() {
    let mut model = planar_arm();

    // extended: the via point is out of its range, the path is a single
    // segment from origin to insertion
    let pose = model.pose().unwrap();
    let extended = model.muscle_length("biceps", &pose).unwrap();
    assert_relative_eq!(extended, UPPER_ARM_LENGTH, epsilon = 1e-12);

    // flexed to 90°: the via point engages and the path bends around it
    model.set_coordinate_value("elbow_flex", FRAC_PI_2).unwrap();
    let pose = model.pose().unwrap();
    let flexed = model.muscle_length("biceps", &pose).unwrap();

    let origin = Point3::new(0.1, 0.0, 0.0);
    let via = Point3::new(0.25, 0.05, 0.0);
    let insertion = Point3::new(UPPER_ARM_LENGTH, 0.1, 0.0);
    let expected = (via - origin).norm() + (insertion - via).norm();
    assert_relative_eq!(flexed, expected, epsilon = 1e-9);

    assert!(
        flexed < extended,
        "flexing the elbow must slacken this biceps path"
    );
}

#[test]
fn spline_driven_translation_follows_the_curve() {
    // a SIMM-style knee: the joint rotates about Z while the tibia
    // origin slides along Y on a spline of the same coordinate
    let knots_x: Vec<Real> = vec![0.0, 0.5, 1.0, 1.5, 2.0];
    let knots_y: Vec<Real> = vec![0.0, -0.02, -0.03, -0.025, -0.01];
    let curve = NaturalCubicSpline::new(knots_x, knots_y).unwrap();

    let mut model = Model::new("knee");
    model.add_body(Body::massless("tibia")).unwrap();
    model
        .add_coordinate(
            Coordinate::new("knee_angle", MotionType::Rotational, 0.0, [0.0, 2.0]).unwrap(),
        )
        .unwrap();

    let mut knee = Joint::new("knee", GROUND, "tibia");
    knee.add_axis(TransformAxis::rotation(
        Vector3::z(),
        Box::new(Linear::default()),
        Some("knee_angle".into()),
    ));
    knee.add_axis(TransformAxis::translation(
        Vector3::y(),
        Box::new(curve.clone()),
        Some("knee_angle".into()),
    ));
    model.add_joint(knee).unwrap();

    for q in [0.0, 0.25, 0.8, 1.4, 2.0] {
        model.set_coordinate_value("knee_angle", q).unwrap();
        let pose = model.pose().unwrap();
        let origin = pose
            .transform_to_ground("tibia", &Point3::origin())
            .unwrap();
        assert_relative_eq!(origin.y, curve.value(&[q]), epsilon = 1e-12);
        assert_relative_eq!(origin.x, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn locked_coordinates_hold_the_pose() {
    let mut model = planar_arm();
    model.coordinate_mut("elbow_flex").unwrap().locked = true;

    assert_eq!(
        model.set_coordinate_value("elbow_flex", 1.0),
        Err(ModelError::LockedCoordinate("elbow_flex".into()))
    );

    let pose = model.pose().unwrap();
    let wrist = model.marker_position("wrist", &pose).unwrap();
    assert_relative_eq!(
        wrist,
        Point3::new(UPPER_ARM_LENGTH + FOREARM_LENGTH, 0.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn clamped_coordinates_pose_at_the_range_edge() {
    let mut model = planar_arm();
    // far past the π limit; the coordinate clamps and the pose follows
    model.set_coordinate_value("elbow_flex", 10.0).unwrap();
    assert_eq!(model.coordinate("elbow_flex").unwrap().value(), PI);
}

#[test]
fn reset_restores_the_default_pose() {
    let mut model = planar_arm();
    model.set_coordinate_value("shoulder_flex", 1.0).unwrap();
    model.set_coordinate_value("elbow_flex", 1.5).unwrap();
    model.reset_coordinates();

    let pose = model.pose().unwrap();
    let wrist = model.marker_position("wrist", &pose).unwrap();
    assert_relative_eq!(
        wrist,
        Point3::new(UPPER_ARM_LENGTH + FOREARM_LENGTH, 0.0, 0.0),
        epsilon = 1e-12
    );
}

#[test]
fn a_joint_naming_a_missing_coordinate_fails_the_pose() {
    let mut model = Model::new("broken");
    model.add_body(Body::massless("segment")).unwrap();
    let mut joint = Joint::new("pin", GROUND, "segment");
    joint.add_axis(TransformAxis::rotation(
        Vector3::z(),
        Box::new(Linear::default()),
        Some("missing".into()),
    ));
    model.add_joint(joint).unwrap();

    assert_eq!(
        model.pose(),
        Err(ModelError::UnknownCoordinate("missing".into()))
    );
}

#[test]
fn a_joint_naming_a_missing_body_fails_the_pose() {
    let mut model = Model::new("broken");
    model
        .add_joint(Joint::new("pin", GROUND, "phantom"))
        .unwrap();
    assert_eq!(model.pose(), Err(ModelError::UnknownBody("phantom".into())));
}

#[test]
fn pose_covers_every_body_and_rejects_strangers() {
    let model = planar_arm();
    let pose = model.pose().unwrap();
    assert_eq!(pose.bodies().count(), 3);

    assert_eq!(
        pose.body_transform("femur").unwrap_err(),
        ModelError::UnknownBody("femur".into())
    );
    assert_eq!(
        model.marker_position("heel", &pose).unwrap_err(),
        ModelError::UnknownMarker("heel".into())
    );
    assert_eq!(
        model.muscle_length("soleus", &pose).unwrap_err(),
        ModelError::UnknownMuscle("soleus".into())
    );
}

#[test]
fn ground_directions_follow_the_body_frame() {
    let mut model = planar_arm();
    model.set_coordinate_value("shoulder_flex", FRAC_PI_2).unwrap();
    let pose = model.pose().unwrap();

    // the upper arm's +X now points along ground +Y
    let direction = pose.vector_to_ground("upper_arm", &Vector3::x()).unwrap();
    assert_relative_eq!(direction, Vector3::y(), epsilon = 1e-9);
}

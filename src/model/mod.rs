//! Model objects: bodies, joints, coordinates, markers, muscles, and
//! the container that wires them to ground and poses them.

mod axis;
pub use axis::TransformAxis;

mod body;
pub use body::Body;

mod coordinate;
pub use coordinate::{Coordinate, MotionType};

mod joint;
pub use joint::Joint;

mod marker;
pub use marker::Marker;

mod muscle;
pub use muscle::{GeometryPath, Muscle, PathCondition, PathPoint};

mod units;
pub use units::{ForceUnit, LengthUnit};

use crate::errors::ModelError;
use crate::float_types::Real;
use crate::transform::Transform;
use hashbrown::HashMap;
use nalgebra::{Point3, Vector3};

/// Name of the distinguished ground body every model starts with.
pub const GROUND: &str = "ground";

/// A musculoskeletal model: named sets of parts, connected to ground by
/// joints. Names are the keys objects refer to each other by, so each
/// set rejects duplicates.
#[derive(Debug)]
pub struct Model {
    pub name: String,
    pub gravity: Vector3<Real>,
    pub length_units: LengthUnit,
    pub force_units: ForceUnit,
    bodies: Vec<Body>,
    joints: Vec<Joint>,
    coordinates: Vec<Coordinate>,
    markers: Vec<Marker>,
    muscles: Vec<Muscle>,
}

impl Model {
    /// An empty model holding only the ground body.
    pub fn new(name: impl Into<String>) -> Self {
        Model {
            name: name.into(),
            gravity: Vector3::new(0.0, -9.806_65, 0.0),
            length_units: LengthUnit::default(),
            force_units: ForceUnit::default(),
            bodies: vec![Body::massless(GROUND)],
            joints: Vec::new(),
            coordinates: Vec::new(),
            markers: Vec::new(),
            muscles: Vec::new(),
        }
    }

    pub fn add_body(&mut self, body: Body) -> Result<(), ModelError> {
        if self.body(&body.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "body",
                name: body.name,
            });
        }
        self.bodies.push(body);
        Ok(())
    }

    /// Add a joint. A body may hang from only one joint and ground may
    /// not hang from any, so bad topology is rejected here rather than
    /// at pose time.
    pub fn add_joint(&mut self, joint: Joint) -> Result<(), ModelError> {
        if self.joint(&joint.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "joint",
                name: joint.name,
            });
        }
        if joint.child_body == GROUND {
            return Err(ModelError::GroundAsChild(joint.name));
        }
        if self
            .joints
            .iter()
            .any(|existing| existing.child_body == joint.child_body)
        {
            return Err(ModelError::MultipleParents(joint.child_body));
        }
        self.joints.push(joint);
        Ok(())
    }

    pub fn add_coordinate(&mut self, coordinate: Coordinate) -> Result<(), ModelError> {
        if self.coordinate(&coordinate.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "coordinate",
                name: coordinate.name,
            });
        }
        self.coordinates.push(coordinate);
        Ok(())
    }

    pub fn add_marker(&mut self, marker: Marker) -> Result<(), ModelError> {
        if self.marker(&marker.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "marker",
                name: marker.name,
            });
        }
        self.markers.push(marker);
        Ok(())
    }

    pub fn add_muscle(&mut self, muscle: Muscle) -> Result<(), ModelError> {
        if self.muscle(&muscle.name).is_some() {
            return Err(ModelError::DuplicateName {
                kind: "muscle",
                name: muscle.name,
            });
        }
        self.muscles.push(muscle);
        Ok(())
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name == name)
    }

    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|joint| joint.name == name)
    }

    pub fn coordinate(&self, name: &str) -> Option<&Coordinate> {
        self.coordinates.iter().find(|c| c.name == name)
    }

    pub fn coordinate_mut(&mut self, name: &str) -> Option<&mut Coordinate> {
        self.coordinates.iter_mut().find(|c| c.name == name)
    }

    pub fn marker(&self, name: &str) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.name == name)
    }

    pub fn muscle(&self, name: &str) -> Option<&Muscle> {
        self.muscles.iter().find(|muscle| muscle.name == name)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn muscles(&self) -> &[Muscle] {
        &self.muscles
    }

    /// Assign one coordinate by name.
    pub fn set_coordinate_value(&mut self, name: &str, value: Real) -> Result<(), ModelError> {
        self.coordinate_mut(name)
            .ok_or_else(|| ModelError::UnknownCoordinate(name.to_string()))?
            .set_value(value)
    }

    /// Return every coordinate to its default value.
    pub fn reset_coordinates(&mut self) {
        for coordinate in &mut self.coordinates {
            coordinate.reset();
        }
    }

    /// Solve forward kinematics at the current coordinate values:
    /// starting from ground, each joint's local transform is chained
    /// onto its parent's until every body has a ground transform.
    ///
    /// Fails if a joint names a missing body or coordinate, or if any
    /// body is left unconnected to ground.
    ///
    /// # Example
    /// ```rust
    /// # use mskrs::float_types::FRAC_PI_2;
    /// # use mskrs::function::Linear;
    /// # use mskrs::model::{Body, Coordinate, GROUND, Joint, Model, MotionType, TransformAxis};
    /// # use nalgebra::{Point3, Vector3};
    /// let mut model = Model::new("pendulum");
    /// model.add_body(Body::massless("rod")).unwrap();
    /// let swing = Coordinate::new("swing", MotionType::Rotational, 0.0, [-3.2, 3.2]).unwrap();
    /// model.add_coordinate(swing).unwrap();
    ///
    /// let mut pivot = Joint::new("pivot", GROUND, "rod");
    /// pivot.add_axis(TransformAxis::rotation(
    ///     Vector3::z(),
    ///     Box::new(Linear::default()),
    ///     Some("swing".into()),
    /// ));
    /// model.add_joint(pivot).unwrap();
    /// model.set_coordinate_value("swing", FRAC_PI_2).unwrap();
    ///
    /// let pose = model.pose().unwrap();
    /// let tip = pose.transform_to_ground("rod", &Point3::new(1.0, 0.0, 0.0)).unwrap();
    /// assert!((tip - Point3::new(0.0, 1.0, 0.0)).norm() < 1e-6, "the rod swings to +Y");
    /// ```
    pub fn pose(&self) -> Result<Pose, ModelError> {
        for joint in &self.joints {
            if self.body(&joint.parent_body).is_none() {
                return Err(ModelError::UnknownBody(joint.parent_body.clone()));
            }
            if self.body(&joint.child_body).is_none() {
                return Err(ModelError::UnknownBody(joint.child_body.clone()));
            }
        }

        let mut transforms: HashMap<String, Transform> = HashMap::new();
        transforms.insert(GROUND.to_string(), Transform::identity());

        // Sweep the joint list until every joint has attached below an
        // already-posed parent; a sweep with no progress means the rest
        // dangle free of ground.
        let mut remaining: Vec<&Joint> = self.joints.iter().collect();
        while !remaining.is_empty() {
            let before = remaining.len();
            let mut deferred = Vec::new();
            for joint in remaining {
                if let Some(parent_to_ground) = transforms.get(&joint.parent_body).copied() {
                    let child_to_ground =
                        joint.local_transform(self)?.compose(&parent_to_ground);
                    transforms.insert(joint.child_body.clone(), child_to_ground);
                } else {
                    deferred.push(joint);
                }
            }
            if deferred.len() == before {
                return Err(ModelError::UnreachableBody(deferred[0].child_body.clone()));
            }
            remaining = deferred;
        }

        for body in &self.bodies {
            if !transforms.contains_key(&body.name) {
                return Err(ModelError::UnreachableBody(body.name.clone()));
            }
        }

        Ok(Pose { transforms })
    }

    /// Ground position of a marker at a pose.
    pub fn marker_position(&self, name: &str, pose: &Pose) -> Result<Point3<Real>, ModelError> {
        let marker = self
            .marker(name)
            .ok_or_else(|| ModelError::UnknownMarker(name.to_string()))?;
        pose.transform_to_ground(&marker.body, &Point3::from(marker.offset))
    }

    /// Length of a muscle's path at a pose.
    pub fn muscle_length(&self, name: &str, pose: &Pose) -> Result<Real, ModelError> {
        let muscle = self
            .muscle(name)
            .ok_or_else(|| ModelError::UnknownMuscle(name.to_string()))?;
        muscle.length(self, pose)
    }
}

/// Body-to-ground transforms for one configuration of the coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    transforms: HashMap<String, Transform>,
}

impl Pose {
    /// The ground transform of `body`.
    pub fn body_transform(&self, body: &str) -> Result<&Transform, ModelError> {
        self.transforms
            .get(body)
            .ok_or_else(|| ModelError::UnknownBody(body.to_string()))
    }

    /// Express a body-frame point in ground.
    pub fn transform_to_ground(
        &self,
        body: &str,
        point: &Point3<Real>,
    ) -> Result<Point3<Real>, ModelError> {
        Ok(self.body_transform(body)?.transform_point(point))
    }

    /// Express a body-frame direction in ground.
    pub fn vector_to_ground(
        &self,
        body: &str,
        vector: &Vector3<Real>,
    ) -> Result<Vector3<Real>, ModelError> {
        Ok(self.body_transform(body)?.transform_vector(vector))
    }

    /// Names of the bodies the pose covers.
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::function::Constant;

    #[test]
    fn a_fresh_model_holds_only_ground() {
        let model = Model::new("empty");
        assert_eq!(model.bodies().len(), 1);
        assert!(model.body(GROUND).is_some());

        let pose = model.pose().unwrap();
        assert_eq!(pose.bodies().count(), 1);
        assert_eq!(
            pose.transform_to_ground(GROUND, &Point3::new(1.0, 2.0, 3.0))
                .unwrap(),
            Point3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut model = Model::new("dupes");
        model.add_body(Body::massless("femur")).unwrap();
        assert_eq!(
            model.add_body(Body::massless("femur")),
            Err(ModelError::DuplicateName {
                kind: "body",
                name: "femur".into()
            })
        );
    }

    #[test]
    fn a_body_may_hang_from_only_one_joint() {
        let mut model = Model::new("loop");
        model.add_body(Body::massless("tibia")).unwrap();
        model.add_joint(Joint::new("knee", GROUND, "tibia")).unwrap();
        assert_eq!(
            model.add_joint(Joint::new("other_knee", GROUND, "tibia")),
            Err(ModelError::MultipleParents("tibia".into()))
        );
    }

    #[test]
    fn ground_is_never_the_child_of_a_joint() {
        let mut model = Model::new("inverted");
        model.add_body(Body::massless("femur")).unwrap();
        model.add_joint(Joint::new("hip", GROUND, "femur")).unwrap();

        let mut upside_down = Joint::new("drop", "femur", GROUND);
        upside_down.add_axis(TransformAxis::translation(
            Vector3::x(),
            Box::new(Constant::new(1.0)),
            None,
        ));
        assert_eq!(
            model.add_joint(upside_down),
            Err(ModelError::GroundAsChild("drop".into()))
        );

        // ground still poses as the identity frame
        let pose = model.pose().unwrap();
        assert_eq!(
            pose.transform_to_ground(GROUND, &Point3::origin()).unwrap(),
            Point3::origin()
        );
    }

    #[test]
    fn bodies_without_a_joint_chain_fail_to_pose() {
        let mut model = Model::new("floating");
        model.add_body(Body::massless("patella")).unwrap();
        assert_eq!(
            model.pose(),
            Err(ModelError::UnreachableBody("patella".into()))
        );
    }
}

//! Body catalog: identifiers, radii and orbital periods.
//!
//! Radii follow IAU WGCCRE mean values. Natural satellites other than the
//! Moon are treated as spheres.

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Bodies known to the eclipse solver.
///
/// Casters (Earth, Jupiter, Saturn, Uranus), their eclipsable moons, and
/// the Sun as light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Earth,
    Moon,
    Jupiter,
    Saturn,
    Uranus,
    Io,
    Europa,
    Ganymede,
    Callisto,
    Mimas,
    Enceladus,
    Tethys,
    Dione,
    Rhea,
    Titan,
    Iapetus,
    Miranda,
    Ariel,
    Umbriel,
    Titania,
    Oberon,
}

impl Body {
    /// Every catalogued body, in code order.
    pub const ALL: [Body; 22] = [
        Self::Sun,
        Self::Moon,
        Self::Earth,
        Self::Io,
        Self::Europa,
        Self::Ganymede,
        Self::Callisto,
        Self::Jupiter,
        Self::Mimas,
        Self::Enceladus,
        Self::Tethys,
        Self::Dione,
        Self::Rhea,
        Self::Titan,
        Self::Iapetus,
        Self::Saturn,
        Self::Ariel,
        Self::Umbriel,
        Self::Titania,
        Self::Oberon,
        Self::Miranda,
        Self::Uranus,
    ];

    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Earth => 399,
            Self::Io => 501,
            Self::Europa => 502,
            Self::Ganymede => 503,
            Self::Callisto => 504,
            Self::Jupiter => 599,
            Self::Mimas => 601,
            Self::Enceladus => 602,
            Self::Tethys => 603,
            Self::Dione => 604,
            Self::Rhea => 605,
            Self::Titan => 606,
            Self::Iapetus => 608,
            Self::Saturn => 699,
            Self::Ariel => 701,
            Self::Umbriel => 702,
            Self::Titania => 703,
            Self::Oberon => 704,
            Self::Miranda => 705,
            Self::Uranus => 799,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::Moon => "Moon",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Io => "Io",
            Self::Europa => "Europa",
            Self::Ganymede => "Ganymede",
            Self::Callisto => "Callisto",
            Self::Mimas => "Mimas",
            Self::Enceladus => "Enceladus",
            Self::Tethys => "Tethys",
            Self::Dione => "Dione",
            Self::Rhea => "Rhea",
            Self::Titan => "Titan",
            Self::Iapetus => "Iapetus",
            Self::Miranda => "Miranda",
            Self::Ariel => "Ariel",
            Self::Umbriel => "Umbriel",
            Self::Titania => "Titania",
            Self::Oberon => "Oberon",
        }
    }

    /// Equatorial radius in km.
    pub const fn equatorial_radius_km(self) -> f64 {
        match self {
            Self::Sun => 695_700.0,
            Self::Earth => 6_378.137,
            Self::Moon => 1_738.1,
            Self::Jupiter => 71_492.0,
            Self::Saturn => 60_268.0,
            Self::Uranus => 25_559.0,
            Self::Io => 1_821.6,
            Self::Europa => 1_560.8,
            Self::Ganymede => 2_634.1,
            Self::Callisto => 2_410.3,
            Self::Mimas => 198.2,
            Self::Enceladus => 252.1,
            Self::Tethys => 531.1,
            Self::Dione => 561.4,
            Self::Rhea => 763.8,
            Self::Titan => 2_574.7,
            Self::Iapetus => 734.5,
            Self::Miranda => 235.8,
            Self::Ariel => 578.9,
            Self::Umbriel => 584.7,
            Self::Titania => 788.9,
            Self::Oberon => 761.4,
        }
    }

    /// Polar radius in km.
    pub const fn polar_radius_km(self) -> f64 {
        match self {
            Self::Earth => 6_356.752,
            Self::Moon => 1_736.0,
            Self::Jupiter => 66_854.0,
            Self::Saturn => 54_364.0,
            Self::Uranus => 24_973.0,
            other => other.equatorial_radius_km(),
        }
    }

    /// The body this one orbits, if it is a natural satellite.
    pub const fn central_body(self) -> Option<Body> {
        match self {
            Self::Moon => Some(Self::Earth),
            Self::Io | Self::Europa | Self::Ganymede | Self::Callisto => Some(Self::Jupiter),
            Self::Mimas
            | Self::Enceladus
            | Self::Tethys
            | Self::Dione
            | Self::Rhea
            | Self::Titan
            | Self::Iapetus => Some(Self::Saturn),
            Self::Miranda | Self::Ariel | Self::Umbriel | Self::Titania | Self::Oberon => {
                Some(Self::Uranus)
            }
            Self::Sun | Self::Earth | Self::Jupiter | Self::Saturn | Self::Uranus => None,
        }
    }

    pub const fn is_natural_satellite(self) -> bool {
        self.central_body().is_some()
    }

    /// Sidereal orbital period in days, for natural satellites.
    pub const fn orbital_period_days(self) -> Option<f64> {
        let days = match self {
            Self::Moon => 27.321_661,
            Self::Io => 1.769_138,
            Self::Europa => 3.551_181,
            Self::Ganymede => 7.154_553,
            Self::Callisto => 16.689_018,
            Self::Mimas => 0.942_422,
            Self::Enceladus => 1.370_218,
            Self::Tethys => 1.887_802,
            Self::Dione => 2.736_915,
            Self::Rhea => 4.517_500,
            Self::Titan => 15.945_421,
            Self::Iapetus => 79.330_183,
            Self::Miranda => 1.413_479,
            Self::Ariel => 2.520_379,
            Self::Umbriel => 4.144_177,
            Self::Titania => 8.705_872,
            Self::Oberon => 13.463_239,
            Self::Sun | Self::Earth | Self::Jupiter | Self::Saturn | Self::Uranus => return None,
        };
        Some(days)
    }
}

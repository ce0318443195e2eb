use super::value_objects::Rating;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub ratings: Vec<Rating>,
}

impl Product {
    /// Constructor for records sourced from the catalog file (no validation).
    pub fn from_catalog(
        id: String,
        title: String,
        description: String,
        image: String,
        url: String,
        ratings: Vec<Rating>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            image,
            url,
            ratings,
        }
    }

    /// Appends a rating to the submission history, oldest first.
    pub fn add_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_append_ratings_in_submission_order() {
        let mut product = Product::from_catalog(
            "1".to_string(),
            "Hand-thrown Mug".to_string(),
            "Stoneware mug with a matte glaze".to_string(),
            "https://example.com/images/mug.jpg".to_string(),
            "https://example.com/products/mug".to_string(),
            vec![Rating::new(4).unwrap()],
        );

        product.add_rating(Rating::new(5).unwrap());
        product.add_rating(Rating::new(3).unwrap());

        let values: Vec<i32> = product.ratings.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![4, 5, 3]);
    }
}

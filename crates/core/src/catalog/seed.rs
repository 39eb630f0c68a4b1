use rust_decimal::Decimal;

use crate::domain::product::{Category, Product, ProductId};

pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1542838132-92c53300491e?ixlib=rb-4.0.3&w=400";

#[rustfmt::skip]
const SEED: &[(u32, &str, Category, i64, u32, &str)] = {
    use Category::*;
    &[
        (1, "Red Apples", Fruits, 199, 50, "https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6?ixlib=rb-4.0.3&w=400"),
        (2, "Green Apples", Fruits, 189, 45, "https://images.unsplash.com/photo-1619546813926-a78fa372cd2?ixlib=rb-4.0.3&w=400"),
        (3, "Bananas", Fruits, 79, 100, "https://images.unsplash.com/photo-1603833665858-e61d17a86224?ixlib=rb-4.0.3&w=400"),
        (4, "Oranges", Fruits, 249, 60, "https://images.unsplash.com/photo-1547514701-42782101795e?ixlib=rb-4.0.3&w=400"),
        (5, "Strawberries", Fruits, 399, 30, "https://images.unsplash.com/photo-1464965911861-746a04b4bca6?ixlib=rb-4.0.3&w=400"),
        (6, "Blueberries", Fruits, 499, 25, "https://images.unsplash.com/photo-1498557850523-fd3d118b962e?ixlib=rb-4.0.3&w=400"),
        (7, "Grapes", Fruits, 299, 40, "https://images.unsplash.com/photo-1537640538966-79f369143f8f?ixlib=rb-4.0.3&w=400"),
        (8, "Pineapple", Fruits, 449, 20, "https://images.unsplash.com/photo-1550258987-190a2d41a8ba?ixlib=rb-4.0.3&w=400"),
        (9, "Watermelon", Fruits, 599, 15, "https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e?ixlib=rb-4.0.3&w=400"),
        (10, "Mangoes", Fruits, 179, 35, "https://images.unsplash.com/photo-1553279768-865429fa0078?ixlib=rb-4.0.3&w=400"),
        (11, "Peaches", Fruits, 229, 28, "https://images.unsplash.com/photo-1629828815544-ce4d2d2c4f82?ixlib=rb-4.0.3&w=400"),
        (12, "Pears", Fruits, 219, 32, "https://images.unsplash.com/photo-1568702846914-96b305d2aaeb?ixlib=rb-4.0.3&w=400"),
        (13, "Plums", Fruits, 279, 24, "https://images.unsplash.com/photo-1574328296379-68edd8cb2b0c?ixlib=rb-4.0.3&w=400"),
        (14, "Cherries", Fruits, 549, 18, "https://images.unsplash.com/photo-1551205850-eeaa32e6b287?ixlib=rb-4.0.3&w=400"),
        (15, "Kiwi", Fruits, 329, 22, "https://images.unsplash.com/photo-1585059895524-72359e06133a?ixlib=rb-4.0.3&w=400"),
        (16, "Avocado", Fruits, 149, 33, "https://images.unsplash.com/photo-1549424403-97c54fba7c87?ixlib=rb-4.0.3&w=400"),
        (17, "Lemons", Fruits, 89, 42, "https://images.unsplash.com/photo-1590502593747-42a4501fba2a?ixlib=rb-4.0.3&w=400"),
        (18, "Limes", Fruits, 79, 38, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (19, "Grapefruit", Fruits, 199, 29, "https://images.unsplash.com/photo-1571835782488-312b0cea57c9?ixlib=rb-4.0.3&w=400"),
        (20, "Coconut", Fruits, 299, 16, "https://images.unsplash.com/photo-1585238342024-78d387f4a707?ixlib=rb-4.0.3&w=400"),
        (31, "Tomatoes", Vegetables, 249, 55, "https://images.unsplash.com/photo-1546470427-227e7b2ced4b?ixlib=rb-4.0.3&w=400"),
        (32, "Carrots", Vegetables, 129, 48, "https://images.unsplash.com/photo-1598170845058-32b9d6a5da37?ixlib=rb-4.0.3&w=400"),
        (33, "Broccoli", Vegetables, 279, 36, "https://images.unsplash.com/photo-1459411621453-7b03977f4bfc?ixlib=rb-4.0.3&w=400"),
        (34, "Cauliflower", Vegetables, 349, 24, "https://images.unsplash.com/photo-1510627498534-cf7e9002faeb?ixlib=rb-4.0.3&w=400"),
        (35, "Spinach", Vegetables, 299, 42, "https://images.unsplash.com/photo-1576045057995-568f588f82fb?ixlib=rb-4.0.3&w=400"),
        (36, "Lettuce", Vegetables, 179, 38, "https://images.unsplash.com/photo-1622206151226-18ca2c9ab4a1?ixlib=rb-4.0.3&w=400"),
        (37, "Cucumber", Vegetables, 149, 52, "https://images.unsplash.com/photo-1449300079323-02e209d9d3a6?ixlib=rb-4.0.3&w=400"),
        (38, "Bell Peppers", Vegetables, 329, 41, "https://images.unsplash.com/photo-1563565375-f3fdfdbefa83?ixlib=rb-4.0.3&w=400"),
        (39, "Onions", Vegetables, 199, 65, "https://images.unsplash.com/photo-1618512496248-a07fe83aa8cb?ixlib=rb-4.0.3&w=400"),
        (40, "Garlic", Vegetables, 499, 28, "https://images.unsplash.com/photo-1553725439-3266c7356ad4?ixlib=rb-4.0.3&w=400"),
        (41, "Potatoes", Vegetables, 199, 75, "https://images.unsplash.com/photo-1518977676601-b53f82aba655?ixlib=rb-4.0.3&w=400"),
        (42, "Sweet Potatoes", Vegetables, 249, 34, "https://images.unsplash.com/photo-1603048588665-791ca8aea617?ixlib=rb-4.0.3&w=400"),
        (43, "Zucchini", Vegetables, 219, 29, "https://images.unsplash.com/photo-1597362925123-77861d3fbac7?ixlib=rb-4.0.3&w=400"),
        (44, "Eggplant", Vegetables, 289, 22, "https://images.unsplash.com/photo-1659261200833-ec8761558af7?ixlib=rb-4.0.3&w=400"),
        (45, "Mushrooms", Vegetables, 399, 18, "https://images.unsplash.com/photo-1506976785307-8732e854ad03?ixlib=rb-4.0.3&w=400"),
        (46, "Green Beans", Vegetables, 299, 33, "https://images.unsplash.com/photo-1628773822503-930a7eaecf80?ixlib=rb-4.0.3&w=400"),
        (47, "Corn", Vegetables, 199, 45, "https://images.unsplash.com/photo-1551754655-cd27e38d2076?ixlib=rb-4.0.3&w=400"),
        (48, "Celery", Vegetables, 229, 31, "https://images.unsplash.com/photo-1590978061461-a2f1295aab79?ixlib=rb-4.0.3&w=400"),
        (49, "Cabbage", Vegetables, 189, 39, "https://images.unsplash.com/photo-1594282486552-05b4d80fbb9f?ixlib=rb-4.0.3&w=400"),
        (50, "Kale", Vegetables, 299, 26, "https://images.unsplash.com/photo-1574316071802-0d684efa7bf5?ixlib=rb-4.0.3&w=400"),
        (61, "Basil", Herbs, 299, 45, "https://images.unsplash.com/photo-1618375569909-3c8616cf488d?ixlib=rb-4.0.3&w=400"),
        (62, "Parsley", Herbs, 199, 52, "https://images.unsplash.com/photo-1553671214-62e7b5bd1d8a?ixlib=rb-4.0.3&w=400"),
        (63, "Cilantro", Herbs, 189, 48, "https://images.unsplash.com/photo-1586611198363-ae7e1d2e5b56?ixlib=rb-4.0.3&w=400"),
        (64, "Rosemary", Herbs, 349, 23, "https://images.unsplash.com/photo-1594297317929-e2e4e6bfcd61?ixlib=rb-4.0.3&w=400"),
        (65, "Thyme", Herbs, 329, 27, "https://images.unsplash.com/photo-1593115057322-e94b77572f20?ixlib=rb-4.0.3&w=400"),
        (66, "Oregano", Herbs, 279, 31, "https://images.unsplash.com/photo-1592568281295-fd2c1b6d9e27?ixlib=rb-4.0.3&w=400"),
        (67, "Sage", Herbs, 399, 19, "https://images.unsplash.com/photo-1555898597-84e87b07b1c5?ixlib=rb-4.0.3&w=400"),
        (68, "Mint", Herbs, 249, 35, "https://images.unsplash.com/photo-1617893972871-8fbb5cf34c84?ixlib=rb-4.0.3&w=400"),
        (69, "Dill", Herbs, 289, 29, "https://images.unsplash.com/photo-1616969829950-26ce98d02e08?ixlib=rb-4.0.3&w=400"),
        (70, "Chives", Herbs, 299, 33, "https://images.unsplash.com/photo-1559843501-4b49c94ccecb?ixlib=rb-4.0.3&w=400"),
        (76, "Dragon Fruit", Exotic, 699, 12, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (77, "Passion Fruit", Exotic, 479, 14, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (78, "Lychee", Exotic, 549, 13, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (79, "Star Fruit", Exotic, 499, 15, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (80, "Durian", Exotic, 1299, 5, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (81, "Jackfruit", Exotic, 899, 8, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (82, "Guava", Exotic, 349, 24, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (83, "Papaya", Exotic, 289, 26, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (84, "Custard Apple", Exotic, 799, 12, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
        (85, "Rambutan", Exotic, 799, 8, "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?ixlib=rb-4.0.3&w=400"),
    ]
};

pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(id, name, category, price, stock, image)| Product {
            id: ProductId(id),
            name: name.to_owned(),
            category,
            price: Decimal::from(price),
            image: image.to_owned(),
            stock,
        })
        .collect()
}
